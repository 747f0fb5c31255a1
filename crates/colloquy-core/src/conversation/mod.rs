//! Conversation store: durable representation of conversations and messages.

pub mod repository;
pub mod store;

pub use repository::ConversationRepository;
pub use store::ConversationStore;
