//! Infrastructure implementations for Colloquy.
//!
//! SQLite repositories (sqlx, split reader/writer pool), the reqwest-based
//! generate transport, the Argon2 password hasher, configuration loading,
//! and responder seeding.

pub mod config;
pub mod crypto;
pub mod generate;
pub mod seed;
pub mod sqlite;
