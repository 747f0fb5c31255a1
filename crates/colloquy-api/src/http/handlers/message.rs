//! Message HTTP handlers.
//!
//! Endpoints:
//! - GET  /api/v1/conversations/{id}/messages - Transcript, oldest first
//! - POST /api/v1/conversations/{id}/messages - Submit a message, get the reply
//!
//! Submitting a message stores it first, then dispatches the responder. The
//! user message stays persisted even when reply generation fails, so a
//! failed POST followed by a GET shows the transcript ending in the user
//! message.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use colloquy_types::conversation::{AuthorKind, Message};
use colloquy_types::error::StoreError;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for submitting a message.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub content: String,
    /// Client-perceived send time; honored for user messages only.
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

/// The stored user message and the responder's reply.
#[derive(Debug, Serialize)]
pub struct ExchangePayload {
    pub message: Message,
    pub reply: Message,
}

/// GET /api/v1/conversations/{id}/messages - Transcript, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Message>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    // Ownership check first; foreign ids read as missing.
    state
        .store
        .get_conversation(&account.id, &id)
        .await?
        .ok_or(StoreError::ConversationNotFound)?;

    let messages = state.store.list_messages(&id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let self_link = format!("/api/v1/conversations/{id}/messages");
    let resp = ApiResponse::success(messages, request_id, elapsed).with_link("self", &self_link);
    Ok(Json(resp))
}

/// POST /api/v1/conversations/{id}/messages - Submit a message and dispatch
/// the responder for a reply.
pub async fn submit_message(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SubmitMessageRequest>,
) -> Result<Json<ApiResponse<ExchangePayload>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversation = state
        .store
        .get_conversation(&account.id, &id)
        .await?
        .ok_or(StoreError::ConversationNotFound)?;

    let message = state
        .store
        .append_message(
            conversation.id,
            AuthorKind::User,
            account.id,
            &body.content,
            body.sent_at,
        )
        .await?;

    let reply = state
        .dispatcher
        .generate_reply(&conversation, &message)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let self_link = format!("/api/v1/conversations/{id}/messages");
    let payload = ExchangePayload { message, reply };
    let resp = ApiResponse::success(payload, request_id, elapsed).with_link("self", &self_link);
    Ok(Json(resp))
}
