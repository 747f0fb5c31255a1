//! Business logic for Colloquy.
//!
//! Defines the repository traits (implemented in colloquy-infra), the
//! conversation store, the response dispatcher with its two reply
//! strategies, and the account service. This crate never depends on
//! infrastructure; everything I/O-shaped sits behind a trait.

pub mod account;
pub mod conversation;
pub mod dispatch;
pub mod responder;

#[cfg(test)]
pub(crate) mod testing;
