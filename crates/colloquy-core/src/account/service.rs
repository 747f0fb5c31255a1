//! Account service: registration, login verification, profile updates.

use chrono::Utc;
use colloquy_types::account::{Account, ProfileUpdate};
use colloquy_types::error::{AccountError, RepositoryError};
use tracing::info;
use uuid::Uuid;

use crate::account::hash::PasswordHasher;
use crate::account::repository::AccountRepository;

/// Minimum password length accepted at registration and update.
const MIN_PASSWORD_CHARS: usize = 6;

/// Orchestrates account lifecycle over a repository and a password hasher.
pub struct AccountService<A: AccountRepository, H: PasswordHasher> {
    accounts: A,
    hasher: H,
}

impl<A: AccountRepository, H: PasswordHasher> AccountService<A, H> {
    /// Create a new account service.
    pub fn new(accounts: A, hasher: H) -> Self {
        Self { accounts, hasher }
    }

    /// Register a new account.
    ///
    /// Fails with [`AccountError::EmailTaken`] when the email is already
    /// registered, [`AccountError::InvalidField`] on malformed input.
    pub async fn register(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        let email = validate_email(email)?;
        let display_name = validate_display_name(display_name)?;
        validate_password(password)?;

        let account = Account {
            id: Uuid::now_v7(),
            email,
            display_name,
            password_hash: self.hasher.hash_password(password)?,
            created_at: Utc::now(),
        };

        let created = match self.accounts.create(&account).await {
            Ok(created) => created,
            Err(RepositoryError::Conflict(_)) => return Err(AccountError::EmailTaken),
            Err(e) => return Err(e.into()),
        };

        info!(account_id = %created.id, "Account registered");
        Ok(created)
    }

    /// Verify credentials and return the account.
    ///
    /// Unknown email and wrong password both yield
    /// [`AccountError::InvalidCredentials`].
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let account = self
            .accounts
            .get_by_email(email.trim())
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self
            .hasher
            .verify_password(password, &account.password_hash)?
        {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }

    /// Get an account by id.
    pub async fn get(&self, id: &Uuid) -> Result<Account, AccountError> {
        self.accounts.get(id).await?.ok_or(AccountError::NotFound)
    }

    /// Apply a partial profile update and return the updated account.
    pub async fn update_profile(
        &self,
        id: &Uuid,
        update: ProfileUpdate,
    ) -> Result<Account, AccountError> {
        let mut account = self.get(id).await?;

        if update.is_empty() {
            return Ok(account);
        }

        if let Some(email) = update.email {
            account.email = validate_email(&email)?;
        }
        if let Some(display_name) = update.display_name {
            account.display_name = validate_display_name(&display_name)?;
        }
        if let Some(password) = update.password {
            validate_password(&password)?;
            account.password_hash = self.hasher.hash_password(&password)?;
        }

        match self.accounts.update(&account).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict(_)) => return Err(AccountError::EmailTaken),
            Err(e) => return Err(e.into()),
        }

        info!(account_id = %account.id, "Profile updated");
        Ok(account)
    }
}

fn validate_email(email: &str) -> Result<String, AccountError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AccountError::InvalidField(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(email)
}

fn validate_display_name(name: &str) -> Result<String, AccountError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountError::InvalidField(
            "display name must not be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AccountError::InvalidField(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }
    Ok(())
}
