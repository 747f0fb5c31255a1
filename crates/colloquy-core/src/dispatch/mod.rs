//! Response dispatch: produce exactly one reply for a stored user message.
//!
//! The dispatcher resolves the conversation's responder, selects one of the
//! two closed reply strategies by kind, runs it, and persists the result as
//! a responder-authored message. All failures are terminal for the request:
//! no retry, no fallback between strategies, no partial reply persisted.

pub mod canned;
pub mod dispatcher;
pub mod prompt;
pub mod strategy;
pub mod transport;

pub use canned::CannedCatalog;
pub use dispatcher::ResponseDispatcher;
pub use strategy::ReplyStrategy;
pub use transport::{GenerateRequest, GenerateTransport};
