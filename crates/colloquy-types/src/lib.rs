//! Shared domain types for Colloquy.
//!
//! This crate contains the core domain types used across the Colloquy chat
//! service: Responder, Conversation, Message, Account, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror, url.

pub mod account;
pub mod config;
pub mod conversation;
pub mod error;
pub mod responder;
