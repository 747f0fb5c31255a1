//! Closed set of reply strategies.
//!
//! Exactly two variants exist: a pure-local canned pick and a single
//! network-bound generate call. Both expose the same `generate(text) ->
//! text` capability so the dispatcher stays free of I/O-specific branching.

use colloquy_types::conversation::normalize_content;
use colloquy_types::error::{DispatchError, TransportError};
use colloquy_types::responder::{Responder, ResponderKind};

use crate::dispatch::canned::CannedCatalog;
use crate::dispatch::prompt::build_prompt;
use crate::dispatch::transport::{GenerateRequest, GenerateTransport};

/// The kind-specific algorithm used to produce a responder's reply text.
pub enum ReplyStrategy<'a, T: GenerateTransport> {
    /// Uniform pick from the fixed canned catalog. No I/O; cannot fail.
    LocalCanned(&'a CannedCatalog),
    /// One bounded call to the responder's generate endpoint.
    RemoteGenerate {
        transport: &'a T,
        endpoint: &'a str,
        model: &'a str,
    },
}

impl<'a, T: GenerateTransport> ReplyStrategy<'a, T> {
    /// Select the strategy for a responder.
    ///
    /// An `http-generate` responder without an endpoint can only come from a
    /// hand-edited row (the constructor forbids it); that inconsistency is a
    /// configuration bug and surfaces as [`DispatchError::UnsupportedKind`].
    pub fn for_responder(
        responder: &'a Responder,
        transport: &'a T,
        catalog: &'a CannedCatalog,
    ) -> Result<Self, DispatchError> {
        match (&responder.kind, responder.endpoint.as_deref()) {
            (ResponderKind::None, _) => Ok(ReplyStrategy::LocalCanned(catalog)),
            (ResponderKind::HttpGenerate, Some(endpoint)) => Ok(ReplyStrategy::RemoteGenerate {
                transport,
                endpoint,
                model: &responder.name,
            }),
            (ResponderKind::HttpGenerate, None) => Err(DispatchError::UnsupportedKind(format!(
                "{} (no endpoint configured)",
                responder.kind
            ))),
        }
    }

    /// Produce the reply text for one user message.
    ///
    /// Remote text is validated against the same content bounds as any
    /// stored message; out-of-bounds text is an invalid upstream response
    /// and nothing is persisted.
    pub async fn generate(&self, user_content: &str) -> Result<String, DispatchError> {
        match self {
            ReplyStrategy::LocalCanned(catalog) => Ok(catalog.pick().to_string()),
            ReplyStrategy::RemoteGenerate {
                transport,
                endpoint,
                model,
            } => {
                let request = GenerateRequest {
                    model: (*model).to_string(),
                    prompt: build_prompt(user_content),
                };

                let raw = transport
                    .generate(endpoint, &request)
                    .await
                    .map_err(|e| match e {
                        TransportError::Malformed(msg) => {
                            DispatchError::InvalidUpstreamResponse(msg)
                        }
                        other => DispatchError::UpstreamUnavailable(other.to_string()),
                    })?;

                normalize_content(&raw)
                    .map_err(|e| DispatchError::InvalidUpstreamResponse(e.to_string()))
            }
        }
    }
}
