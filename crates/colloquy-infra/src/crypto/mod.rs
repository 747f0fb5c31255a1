//! Cryptographic operations for Colloquy.
//!
//! - `password`: Argon2id password hashing for account credentials

pub mod password;
