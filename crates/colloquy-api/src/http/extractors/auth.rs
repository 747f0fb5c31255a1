//! Bearer-token authentication extractor.
//!
//! Session tokens are JWTs signed with a server-local HMAC secret. The
//! secret comes from `COLLOQUY_TOKEN_SECRET` when set, otherwise from
//! `{data_dir}/token.key` (generated on first start). Rotating the secret
//! invalidates all outstanding tokens.

use std::path::Path;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use colloquy_types::account::Account;

use crate::http::error::AppError;
use crate::state::AppState;

/// Env var overriding the on-disk token secret.
pub const TOKEN_SECRET_ENV: &str = "COLLOQUY_TOKEN_SECRET";

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub sub: Uuid,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// The authenticated account. Extracting this validates the bearer token
/// and loads the account, so deleted accounts fail closed.
pub struct CurrentUser(pub Account);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;

        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(state.token_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?
        .claims;

        let account = state
            .account_service
            .get(&claims.sub)
            .await
            .map_err(|_| AppError::Unauthorized("Account no longer exists".to_string()))?;

        Ok(CurrentUser(account))
    }
}

/// Issue a signed session token for an account.
pub fn issue_token(account_id: &Uuid, ttl_secs: i64, secret: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: *account_id,
        exp: chrono::Utc::now().timestamp() + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token signing failed: {e}")))
}

/// Extract the bearer token from the Authorization header.
fn extract_bearer_token(parts: &Parts) -> Result<String, AppError> {
    let auth = parts.headers.get("authorization").ok_or_else(|| {
        AppError::Unauthorized(
            "Missing token. Provide via 'Authorization: Bearer <token>' header.".to_string(),
        )
    })?;

    let auth_str = auth
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header encoding".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .ok_or_else(|| {
            AppError::Unauthorized("Authorization header must use the Bearer scheme".to_string())
        })
}

/// Resolve the token-signing secret.
///
/// Prefers `COLLOQUY_TOKEN_SECRET`; otherwise reads `{data_dir}/token.key`,
/// generating it (32 random bytes, hex) if absent.
pub async fn ensure_token_secret(data_dir: &Path) -> anyhow::Result<String> {
    if let Ok(secret) = std::env::var(TOKEN_SECRET_ENV) {
        if !secret.is_empty() {
            return Ok(secret);
        }
    }

    let key_path = data_dir.join("token.key");
    match tokio::fs::read_to_string(&key_path).await {
        Ok(secret) => Ok(secret.trim().to_string()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            use rand::RngCore;
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            let secret: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
            tokio::fs::write(&key_path, &secret).await?;
            tracing::info!(path = %key_path.display(), "Generated token signing secret");
            Ok(secret)
        }
        Err(err) => Err(err.into()),
    }
}
