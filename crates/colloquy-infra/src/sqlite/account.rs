//! SQLite account repository implementation.

use colloquy_core::account::AccountRepository;
use colloquy_types::account::Account;
use colloquy_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `AccountRepository`.
pub struct SqliteAccountRepository {
    pool: DatabasePool,
}

impl SqliteAccountRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepositoryError::Conflict(db.message().to_string());
        }
    }
    RepositoryError::Query(e.to_string())
}

/// Internal row type for mapping SQLite rows to domain Account.
struct AccountRow {
    id: String,
    email: String,
    display_name: String,
    password_hash: String,
    created_at: String,
}

impl AccountRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_account(self) -> Result<Account, RepositoryError> {
        Ok(Account {
            id: parse_uuid(&self.id, "account id")?,
            email: self.email,
            display_name: self.display_name,
            password_hash: self.password_hash,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO accounts (id, email, display_name, password_hash, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.password_hash)
        .bind(format_datetime(&account.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(map_write_error)?;

        Ok(account.clone())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let account_row = AccountRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(account_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let account_row = AccountRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(account_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, account: &Account) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE accounts SET email = ?, display_name = ?, password_hash = ? WHERE id = ?",
        )
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.password_hash)
        .bind(account.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_account(email: &str) -> Account {
        Account {
            id: Uuid::now_v7(),
            email: email.to_string(),
            display_name: "Ada".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let account = make_account("ada@example.com");
        repo.create(&account).await.unwrap();

        let found = repo.get(&account.id).await.unwrap().unwrap();
        assert_eq!(found.email, "ada@example.com");

        let by_email = repo.get_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, account.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        repo.create(&make_account("ada@example.com")).await.unwrap();
        let result = repo.create(&make_account("ada@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_changes_fields() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let mut account = make_account("ada@example.com");
        repo.create(&account).await.unwrap();

        account.display_name = "Countess".to_string();
        account.password_hash = "$argon2id$new".to_string();
        repo.update(&account).await.unwrap();

        let found = repo.get(&account.id).await.unwrap().unwrap();
        assert_eq!(found.display_name, "Countess");
        assert_eq!(found.password_hash, "$argon2id$new");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let result = repo.update(&make_account("ghost@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_conflict() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        repo.create(&make_account("ada@example.com")).await.unwrap();
        let mut other = make_account("grace@example.com");
        repo.create(&other).await.unwrap();

        other.email = "ada@example.com".to_string();
        let result = repo.update(&other).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }
}
