//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use colloquy_types::error::{AccountError, DispatchError, StoreError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Conversation store errors.
    Store(StoreError),
    /// Response dispatch errors.
    Dispatch(DispatchError),
    /// Account errors.
    Account(AccountError),
    /// Authentication failure.
    Unauthorized(String),
    /// Validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        AppError::Dispatch(e)
    }
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        AppError::Account(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(StoreError::ResponderNotFound) => (
                StatusCode::NOT_FOUND,
                "RESPONDER_NOT_FOUND",
                "Responder not found".to_string(),
            ),
            AppError::Store(StoreError::ConversationNotFound) => (
                StatusCode::NOT_FOUND,
                "CONVERSATION_NOT_FOUND",
                "Conversation not found".to_string(),
            ),
            AppError::Store(StoreError::InvalidContent(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                e.to_string(),
            ),
            AppError::Dispatch(DispatchError::ResponderNotFound) => (
                StatusCode::NOT_FOUND,
                "RESPONDER_NOT_FOUND",
                "Responder not found".to_string(),
            ),
            AppError::Dispatch(DispatchError::UnsupportedKind(kind)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNSUPPORTED_RESPONDER_KIND",
                format!("Responder kind '{kind}' cannot be dispatched"),
            ),
            AppError::Dispatch(DispatchError::InvalidUpstreamResponse(msg)) => (
                StatusCode::BAD_GATEWAY,
                "INVALID_UPSTREAM_RESPONSE",
                msg.clone(),
            ),
            AppError::Dispatch(DispatchError::UpstreamUnavailable(msg)) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::Dispatch(DispatchError::Store(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                e.to_string(),
            ),
            AppError::Account(AccountError::EmailTaken) => (
                StatusCode::CONFLICT,
                "EMAIL_TAKEN",
                "Email already registered".to_string(),
            ),
            AppError::Account(AccountError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
            ),
            AppError::Account(AccountError::NotFound) => (
                StatusCode::NOT_FOUND,
                "ACCOUNT_NOT_FOUND",
                "Account not found".to_string(),
            ),
            AppError::Account(AccountError::InvalidField(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Account(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ACCOUNT_ERROR",
                e.to_string(),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
