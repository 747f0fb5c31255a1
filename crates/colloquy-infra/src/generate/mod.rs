//! HTTP implementation of the generate transport.
//!
//! Speaks the Ollama-style generate protocol: one POST with
//! `{model, prompt, stream: false}`, one JSON body back with a `response`
//! field. No retries; the request timeout is the only bound.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use colloquy_core::dispatch::{GenerateRequest, GenerateTransport};
use colloquy_types::error::TransportError;

/// Wire request for the generate endpoint.
#[derive(Debug, Serialize)]
struct GenerateWireRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Wire response from the generate endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct GenerateWireResponse {
    response: String,
}

/// Reqwest-backed [`GenerateTransport`].
pub struct HttpGenerateClient {
    client: reqwest::Client,
}

impl HttpGenerateClient {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl GenerateTransport for HttpGenerateClient {
    async fn generate(
        &self,
        endpoint: &str,
        request: &GenerateRequest,
    ) -> Result<String, TransportError> {
        let body = GenerateWireRequest {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
        };

        let response = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let wire: GenerateWireResponse = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;

        Ok(wire.response)
    }
}
