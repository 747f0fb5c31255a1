//! Account HTTP handlers.
//!
//! Endpoints:
//! - POST  /api/v1/accounts       - Register a new account
//! - POST  /api/v1/accounts/login - Verify credentials, issue a token
//! - GET   /api/v1/accounts/me    - Current account profile
//! - PATCH /api/v1/accounts/me    - Partial profile update

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use colloquy_types::account::{AccountProfile, ProfileUpdate};

use crate::http::error::AppError;
use crate::http::extractors::auth::{issue_token, CurrentUser};
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile plus a fresh session token.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub account: AccountProfile,
    pub token: String,
}

/// POST /api/v1/accounts - Register a new account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthPayload>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let account = state
        .account_service
        .register(&body.email, &body.display_name, &body.password)
        .await?;

    let token = issue_token(
        &account.id,
        state.config.token_ttl_secs,
        &state.token_secret,
    )?;

    let payload = AuthPayload {
        account: account.profile(),
        token,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    let resp =
        ApiResponse::success(payload, request_id, elapsed).with_link("self", "/api/v1/accounts/me");
    Ok(Json(resp))
}

/// POST /api/v1/accounts/login - Verify credentials and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthPayload>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let account = state
        .account_service
        .authenticate(&body.email, &body.password)
        .await?;

    let token = issue_token(
        &account.id,
        state.config.token_ttl_secs,
        &state.token_secret,
    )?;

    let payload = AuthPayload {
        account: account.profile(),
        token,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    let resp =
        ApiResponse::success(payload, request_id, elapsed).with_link("self", "/api/v1/accounts/me");
    Ok(Json(resp))
}

/// GET /api/v1/accounts/me - Current account profile.
pub async fn me(
    CurrentUser(account): CurrentUser,
) -> Result<Json<ApiResponse<AccountProfile>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(account.profile(), request_id, elapsed)
        .with_link("self", "/api/v1/accounts/me");
    Ok(Json(resp))
}

/// PATCH /api/v1/accounts/me - Partial profile update.
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ApiResponse<AccountProfile>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let updated = state
        .account_service
        .update_profile(&account.id, update)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(updated.profile(), request_id, elapsed)
        .with_link("self", "/api/v1/accounts/me");
    Ok(Json(resp))
}
