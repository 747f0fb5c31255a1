//! Responder HTTP handlers.
//!
//! Endpoints:
//! - GET /api/v1/responders - List available responders

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use colloquy_core::responder::ResponderRepository;
use colloquy_types::error::StoreError;
use colloquy_types::responder::Responder;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/responders - List available responders, ordered by name.
pub async fn list_responders(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Responder>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let responders = state
        .store
        .responders()
        .list()
        .await
        .map_err(StoreError::from)?;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(responders, request_id, elapsed)
        .with_link("self", "/api/v1/responders");
    Ok(Json(resp))
}
