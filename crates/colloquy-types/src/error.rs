use thiserror::Error;

/// Errors from repository operations (used by trait definitions in colloquy-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from responder construction.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("http-generate responders require an endpoint URL")]
    MissingEndpoint,

    #[error("responders without a model must not carry an endpoint URL")]
    UnexpectedEndpoint,

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

/// Message content validation failures.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("message content is empty after trimming")]
    Empty,

    #[error("message content exceeds {max} characters (got {got})")]
    TooLong { max: usize, got: usize },
}

/// Errors from the conversation store.
///
/// Persistence failures are propagated unchanged inside `Repository`; the
/// store never swallows them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("responder not found")]
    ResponderNotFound,

    #[error("conversation not found")]
    ConversationNotFound,

    #[error(transparent)]
    InvalidContent(#[from] ContentError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Failures from the outbound generate transport.
///
/// `Request` and `Status` mean the upstream never produced usable text
/// (network failure, timeout, non-success status); `Malformed` means it
/// answered with a body the transport could not extract text from.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("malformed upstream body: {0}")]
    Malformed(String),
}

/// Terminal failures from the response dispatcher.
///
/// None of these are retried, and none leave a partially persisted reply;
/// the user message stored before dispatch is the only durable state.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The conversation references a responder that no longer exists.
    /// Data inconsistency; non-retryable.
    #[error("responder not found")]
    ResponderNotFound,

    /// The stored kind discriminator is not one of the known strategies.
    /// Configuration/data bug, not a runtime condition to recover from.
    #[error("unsupported responder kind: '{0}'")]
    UnsupportedKind(String),

    /// The upstream answered, but with text outside the message bounds.
    #[error("invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    /// Network failure, non-success status, or timeout on the single attempt.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from account registration, authentication, and profile updates.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("email already registered")]
    EmailTaken,

    /// Covers both unknown email and wrong password; callers cannot tell
    /// the two apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account not found")]
    NotFound,

    #[error("invalid profile field: {0}")]
    InvalidField(String),

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
