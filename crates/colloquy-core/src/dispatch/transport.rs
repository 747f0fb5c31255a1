//! GenerateTransport trait definition.
//!
//! The single outbound HTTP call of the remote strategy sits behind this
//! trait; the reqwest implementation lives in colloquy-infra.

use colloquy_types::error::TransportError;

/// One generate request to an upstream model server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Model identifier; the responder's display name by convention.
    pub model: String,
    /// Fully templated prompt (see [`crate::dispatch::prompt`]).
    pub prompt: String,
}

/// Transport for the `http-generate` strategy.
///
/// One synchronous call, bounded by the implementation's timeout. The
/// dispatcher never retries: a failure here is terminal for the request.
pub trait GenerateTransport: Send + Sync {
    /// Submit `request` to `endpoint` and return the generated text.
    fn generate(
        &self,
        endpoint: &str,
        request: &GenerateRequest,
    ) -> impl std::future::Future<Output = Result<String, TransportError>> + Send;
}
