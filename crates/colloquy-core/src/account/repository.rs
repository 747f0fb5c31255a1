//! AccountRepository trait definition.

use colloquy_types::account::Account;
use colloquy_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for account persistence.
///
/// The email column is unique; `create` and `update` report a duplicate as
/// [`RepositoryError::Conflict`].
pub trait AccountRepository: Send + Sync {
    /// Persist a new account.
    fn create(
        &self,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<Account, RepositoryError>> + Send;

    /// Get an account by id.
    fn get(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Account>, RepositoryError>> + Send;

    /// Get an account by its unique email.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<Account>, RepositoryError>> + Send;

    /// Update email, display name, and password hash of an existing account.
    fn update(
        &self,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
