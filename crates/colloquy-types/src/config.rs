//! Runtime configuration for the Colloquy server.

use serde::{Deserialize, Serialize};

/// Server configuration, loaded from `{data_dir}/config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bind address for the REST API.
    pub bind_host: String,
    /// Bind port for the REST API.
    pub bind_port: u16,
    /// Timeout for the outbound generate call, in seconds. Elapsed timeouts
    /// are reported as upstream-unavailable; there is no retry.
    pub generate_timeout_secs: u64,
    /// Session token lifetime, in seconds.
    pub token_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 3000,
            generate_timeout_secs: 30,
            token_ttl_secs: 24 * 60 * 60,
        }
    }
}
