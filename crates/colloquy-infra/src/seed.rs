//! Built-in responder seeding.
//!
//! Run at server startup: upserts the two built-in responders so a fresh
//! database is immediately usable. Upsert keys on name, so existing rows
//! keep their ids across restarts.

use anyhow::Result;
use colloquy_core::responder::ResponderRepository;
use colloquy_types::responder::{Responder, ResponderKind};

/// Default endpoint for the `qwen` responder (Ollama-style generate API).
pub const DEFAULT_GENERATE_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Env var overriding the generate endpoint of the seeded `qwen` responder.
pub const GENERATE_URL_ENV: &str = "COLLOQUY_GENERATE_URL";

/// Upsert the built-in responders: `default` (canned replies) and `qwen`
/// (remote generation).
pub async fn seed_responders<R: ResponderRepository>(repo: &R) -> Result<()> {
    let endpoint =
        std::env::var(GENERATE_URL_ENV).unwrap_or_else(|_| DEFAULT_GENERATE_ENDPOINT.to_string());

    let default = Responder::new("default", ResponderKind::None, None)?;
    let stored = repo.upsert(&default).await?;
    tracing::debug!(responder = %stored.name, id = %stored.id, "seeded responder");

    let qwen = Responder::new("qwen", ResponderKind::HttpGenerate, Some(endpoint))?;
    let stored = repo.upsert(&qwen).await?;
    tracing::debug!(responder = %stored.name, id = %stored.id, "seeded responder");

    Ok(())
}
