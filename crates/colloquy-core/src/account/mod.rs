//! Accounts: registration, authentication, profile updates.

pub mod hash;
pub mod repository;
pub mod service;

pub use hash::PasswordHasher;
pub use repository::AccountRepository;
pub use service::AccountService;
