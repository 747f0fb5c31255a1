//! Conversation and message types.
//!
//! A conversation is an ordered thread of messages between exactly one
//! account and one responder. Messages are 1-128 characters after trimming
//! and are totally ordered by `created_at` within their conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

/// Upper bound on message content length, in characters after trimming.
pub const MAX_CONTENT_CHARS: usize = 128;

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (author_kind IN ('user', 'responder'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorKind {
    User,
    Responder,
}

impl fmt::Display for AuthorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorKind::User => write!(f, "user"),
            AuthorKind::Responder => write!(f, "responder"),
        }
    }
}

impl FromStr for AuthorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(AuthorKind::User),
            "responder" => Ok(AuthorKind::Responder),
            other => Err(format!("invalid author kind: '{other}'")),
        }
    }
}

/// One thread between an account and a responder.
///
/// Owner and responder are fixed for the conversation's lifetime; the record
/// is never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub responder_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One authored unit of text within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub author_kind: AuthorKind,
    /// The account id for user messages, the responder id otherwise.
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Trim and bounds-check raw message content.
///
/// Returns the trimmed content, or a [`ContentError`] when it is empty or
/// exceeds [`MAX_CONTENT_CHARS`] characters. Every stored message -- user
/// submissions and upstream-generated replies alike -- passes through this.
pub fn normalize_content(raw: &str) -> Result<String, ContentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Empty);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(ContentError::TooLong {
            max: MAX_CONTENT_CHARS,
            got: chars,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_kind_roundtrip() {
        for kind in [AuthorKind::User, AuthorKind::Responder] {
            let s = kind.to_string();
            let parsed: AuthorKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_content("  hello  ").unwrap(), "hello");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_content(""), Err(ContentError::Empty)));
        assert!(matches!(
            normalize_content("   \t\n "),
            Err(ContentError::Empty)
        ));
    }

    #[test]
    fn test_normalize_boundary_lengths() {
        let max = "a".repeat(MAX_CONTENT_CHARS);
        assert_eq!(normalize_content(&max).unwrap(), max);

        let over = "a".repeat(MAX_CONTENT_CHARS + 1);
        assert!(matches!(
            normalize_content(&over),
            Err(ContentError::TooLong { max: 128, got: 129 })
        ));
    }

    #[test]
    fn test_normalize_counts_chars_not_bytes() {
        // 128 multibyte characters are within bounds even though the byte
        // length exceeds 128.
        let content = "é".repeat(MAX_CONTENT_CHARS);
        assert_eq!(normalize_content(&content).unwrap(), content);
    }

    #[test]
    fn test_normalize_trims_before_bounds_check() {
        let padded = format!("  {}  ", "a".repeat(MAX_CONTENT_CHARS));
        assert!(normalize_content(&padded).is_ok());
    }
}
