//! ConversationRepository trait definition.
//!
//! Provides create/read operations for conversations and append/read for
//! messages. Uses native async fn in traits (RPITIT, Rust 2024 edition).

use colloquy_types::conversation::{Conversation, Message};
use colloquy_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for conversation and message persistence.
///
/// Implementations live in colloquy-infra (e.g., `SqliteConversationRepository`).
/// Conversations and messages are append-only: there are no update or delete
/// operations.
pub trait ConversationRepository: Send + Sync {
    /// Persist a new conversation.
    fn create(
        &self,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<Conversation, RepositoryError>> + Send;

    /// Look up a conversation by id, scoped to its owner.
    ///
    /// Ownership is part of the lookup predicate: a conversation that exists
    /// but belongs to another account is reported as absent, never as a
    /// distinct error.
    fn get_for_owner(
        &self,
        owner_id: &Uuid,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// List an owner's conversations, ordered by created_at DESC.
    fn list_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Conversation>, RepositoryError>> + Send;

    /// Append a message to its conversation.
    fn save_message(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Messages of a conversation, ordered by created_at ASC.
    fn list_messages(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Number of messages in a conversation.
    fn count_messages(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<u32, RepositoryError>> + Send;

    /// Total conversations across all owners.
    fn count_conversations(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Total messages across all conversations.
    fn count_all_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
