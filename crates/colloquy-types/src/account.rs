//! Account types for the authentication layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` is an Argon2 PHC string and is never serialized; API
/// responses use [`AccountProfile`] instead.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    /// Unique login identifier.
    pub email: String,
    /// Freeform display name shown as the author of user messages.
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The serializable view of this account (no credential material).
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Fields a PATCH /accounts/me request may change. All optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.display_name.is_none() && self.password.is_none()
    }
}
