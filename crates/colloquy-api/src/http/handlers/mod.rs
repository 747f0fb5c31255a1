//! HTTP request handlers for the REST API.

pub mod account;
pub mod conversation;
pub mod message;
pub mod responder;
