//! Responder types: the configured reply-generation entities users chat with.
//!
//! A responder pairs a display identity with a reply strategy discriminator.
//! The seed step creates them; afterwards they are immutable within a running
//! process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::ResponderError;

/// How a responder produces replies.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (kind IN ('none', 'http-generate'))`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponderKind {
    /// No model attached: replies come from a fixed local catalog.
    None,
    /// One synchronous HTTP call to an external generate endpoint.
    HttpGenerate,
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderKind::None => write!(f, "none"),
            ResponderKind::HttpGenerate => write!(f, "http-generate"),
        }
    }
}

impl FromStr for ResponderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ResponderKind::None),
            "http-generate" => Ok(ResponderKind::HttpGenerate),
            other => Err(format!("invalid responder kind: '{other}'")),
        }
    }
}

/// A configured reply-generation entity.
///
/// Invariants (enforced by [`Responder::new`]):
/// - `HttpGenerate` responders carry an absolute endpoint URL.
/// - `None` responders carry no endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responder {
    pub id: Uuid,
    /// Unique display identity ("default", "qwen", ...).
    pub name: String,
    pub kind: ResponderKind,
    /// Generate endpoint; present exactly when `kind` is `HttpGenerate`.
    pub endpoint: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Responder {
    /// Build a responder, enforcing the kind/endpoint invariant.
    pub fn new(
        name: impl Into<String>,
        kind: ResponderKind,
        endpoint: Option<String>,
    ) -> Result<Self, ResponderError> {
        let endpoint = match (&kind, endpoint) {
            (ResponderKind::HttpGenerate, Some(raw)) => {
                let parsed = url::Url::parse(&raw)
                    .map_err(|e| ResponderError::InvalidEndpoint(e.to_string()))?;
                if parsed.cannot_be_a_base() {
                    return Err(ResponderError::InvalidEndpoint(format!(
                        "'{raw}' is not an absolute URL"
                    )));
                }
                Some(raw)
            }
            (ResponderKind::HttpGenerate, None) => return Err(ResponderError::MissingEndpoint),
            (ResponderKind::None, Some(_)) => return Err(ResponderError::UnexpectedEndpoint),
            (ResponderKind::None, None) => None,
        };

        Ok(Self {
            id: Uuid::now_v7(),
            name: name.into(),
            kind,
            endpoint,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [ResponderKind::None, ResponderKind::HttpGenerate] {
            let s = kind.to_string();
            let parsed: ResponderKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_kind_serde_wire_strings() {
        let json = serde_json::to_string(&ResponderKind::HttpGenerate).unwrap();
        assert_eq!(json, "\"http-generate\"");
        let json = serde_json::to_string(&ResponderKind::None).unwrap();
        assert_eq!(json, "\"none\"");
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!("ollama-v2".parse::<ResponderKind>().is_err());
    }

    #[test]
    fn test_http_generate_requires_endpoint() {
        let err = Responder::new("qwen", ResponderKind::HttpGenerate, None).unwrap_err();
        assert!(matches!(err, ResponderError::MissingEndpoint));
    }

    #[test]
    fn test_http_generate_rejects_relative_endpoint() {
        let err = Responder::new(
            "qwen",
            ResponderKind::HttpGenerate,
            Some("/api/generate".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ResponderError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_none_rejects_endpoint() {
        let err = Responder::new(
            "default",
            ResponderKind::None,
            Some("http://localhost:11434/api/generate".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ResponderError::UnexpectedEndpoint));
    }

    #[test]
    fn test_valid_responders() {
        let canned = Responder::new("default", ResponderKind::None, None).unwrap();
        assert!(canned.endpoint.is_none());

        let remote = Responder::new(
            "qwen",
            ResponderKind::HttpGenerate,
            Some("http://localhost:11434/api/generate".to_string()),
        )
        .unwrap();
        assert_eq!(
            remote.endpoint.as_deref(),
            Some("http://localhost:11434/api/generate")
        );
    }
}
