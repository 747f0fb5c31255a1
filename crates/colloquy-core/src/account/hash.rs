//! PasswordHasher trait definition.
//!
//! Implemented in colloquy-infra with Argon2. Kept as a trait so the
//! account service stays testable without real key derivation.

use colloquy_types::error::AccountError;

/// Hashes and verifies account passwords.
pub trait PasswordHasher: Send + Sync {
    /// Derive a storable hash (PHC string) from a plaintext password.
    fn hash_password(&self, password: &str) -> Result<String, AccountError>;

    /// Check a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AccountError>;
}
