//! SQLite responder repository implementation.
//!
//! Implements `ResponderRepository` from `colloquy-core` using sqlx with
//! split read/write pools: raw queries, private Row structs, reader for
//! SELECT and writer for mutations.

use colloquy_core::responder::ResponderRepository;
use colloquy_types::error::RepositoryError;
use colloquy_types::responder::{Responder, ResponderKind};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `ResponderRepository`.
pub struct SqliteResponderRepository {
    pool: DatabasePool,
}

impl SqliteResponderRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Responder.
struct ResponderRow {
    id: String,
    name: String,
    kind: String,
    endpoint: Option<String>,
    created_at: String,
}

impl ResponderRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            kind: row.try_get("kind")?,
            endpoint: row.try_get("endpoint")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_responder(self) -> Result<Responder, RepositoryError> {
        let id = parse_uuid(&self.id, "responder id")?;
        // A discriminator outside the known set is a data bug; the CHECK
        // constraint should have rejected it at insert time.
        let kind: ResponderKind = self.kind.parse().map_err(RepositoryError::Query)?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Responder {
            id,
            name: self.name,
            kind,
            endpoint: self.endpoint,
            created_at,
        })
    }
}

impl ResponderRepository for SqliteResponderRepository {
    async fn get(&self, id: &Uuid) -> Result<Option<Responder>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM responders WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let responder_row = ResponderRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(responder_row.into_responder()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Responder>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM responders WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let responder_row = ResponderRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(responder_row.into_responder()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Responder>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM responders ORDER BY name ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut responders = Vec::with_capacity(rows.len());
        for row in &rows {
            let responder_row =
                ResponderRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            responders.push(responder_row.into_responder()?);
        }

        Ok(responders)
    }

    async fn upsert(&self, responder: &Responder) -> Result<Responder, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO responders (id, name, kind, endpoint, created_at)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT(name) DO UPDATE SET kind = excluded.kind, endpoint = excluded.endpoint"#,
        )
        .bind(responder.id.to_string())
        .bind(&responder.name)
        .bind(responder.kind.to_string())
        .bind(&responder.endpoint)
        .bind(format_datetime(&responder.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        // Re-read by name: on conflict the original id and created_at stand.
        self.get_by_name(&responder.name)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}
