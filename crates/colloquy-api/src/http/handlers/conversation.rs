//! Conversation HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/conversations      - Open a conversation with a responder
//! - GET  /api/v1/conversations      - List the caller's conversations
//! - GET  /api/v1/conversations/{id} - Get one conversation

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use colloquy_types::conversation::{Conversation, Message};
use colloquy_types::error::StoreError;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for opening a conversation.
#[derive(Debug, Deserialize)]
pub struct CreateConversationRequest {
    pub responder_id: Uuid,
}

/// POST /api/v1/conversations - Open a conversation with a responder.
pub async fn create_conversation(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Json(body): Json<CreateConversationRequest>,
) -> Result<Json<ApiResponse<Conversation>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversation = state
        .store
        .create_conversation(account.id, body.responder_id)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let self_link = format!("/api/v1/conversations/{}", conversation.id);
    let messages_link = format!("/api/v1/conversations/{}/messages", conversation.id);
    let resp = ApiResponse::success(conversation, request_id, elapsed)
        .with_link("self", &self_link)
        .with_link("messages", &messages_link);
    Ok(Json(resp))
}

/// GET /api/v1/conversations - List the caller's conversations, newest first.
pub async fn list_conversations(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<ApiResponse<Vec<Conversation>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversations = state.store.list_conversations(&account.id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(conversations, request_id, elapsed)
        .with_link("self", "/api/v1/conversations");
    Ok(Json(resp))
}

/// A conversation together with its ordered transcript.
#[derive(Debug, serde::Serialize)]
pub struct ConversationDetail {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub messages: Vec<Message>,
}

/// GET /api/v1/conversations/{id} - Get one of the caller's conversations,
/// with its messages oldest first.
///
/// Foreign and missing conversations are both 404.
pub async fn get_conversation(
    State(state): State<AppState>,
    CurrentUser(account): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ConversationDetail>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversation = state
        .store
        .get_conversation(&account.id, &id)
        .await?
        .ok_or(StoreError::ConversationNotFound)?;

    let messages = state.store.list_messages(&conversation.id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let self_link = format!("/api/v1/conversations/{}", conversation.id);
    let messages_link = format!("/api/v1/conversations/{}/messages", conversation.id);
    let detail = ConversationDetail {
        conversation,
        messages,
    };
    let resp = ApiResponse::success(detail, request_id, elapsed)
        .with_link("self", &self_link)
        .with_link("messages", &messages_link);
    Ok(Json(resp))
}
