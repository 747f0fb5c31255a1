//! Responder lookup.

pub mod repository;

pub use repository::ResponderRepository;
