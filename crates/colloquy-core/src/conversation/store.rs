//! Conversation store orchestrating conversation lifecycle and message
//! persistence.
//!
//! The store owns the durable representation of conversations and messages.
//! It validates content bounds and the timestamp policy before handing
//! records to the repository; persistence errors propagate unchanged.

use chrono::{DateTime, Utc};
use colloquy_types::conversation::{normalize_content, AuthorKind, Conversation, Message};
use colloquy_types::error::StoreError;
use tracing::info;
use uuid::Uuid;

use crate::conversation::repository::ConversationRepository;
use crate::responder::repository::ResponderRepository;

/// Owns persisted conversations and messages.
///
/// Generic over `ConversationRepository` and `ResponderRepository` to keep
/// clean architecture (colloquy-core never depends on colloquy-infra).
pub struct ConversationStore<C: ConversationRepository, R: ResponderRepository> {
    conversations: C,
    responders: R,
}

impl<C: ConversationRepository, R: ResponderRepository> ConversationStore<C, R> {
    /// Create a new store with the given repositories.
    pub fn new(conversations: C, responders: R) -> Self {
        Self {
            conversations,
            responders,
        }
    }

    /// Access the conversation repository.
    pub fn conversations(&self) -> &C {
        &self.conversations
    }

    /// Access the responder repository.
    pub fn responders(&self) -> &R {
        &self.responders
    }

    /// Open a new conversation between `owner_id` and the given responder.
    ///
    /// Fails with [`StoreError::ResponderNotFound`] when `responder_id` does
    /// not reference an existing responder.
    pub async fn create_conversation(
        &self,
        owner_id: Uuid,
        responder_id: Uuid,
    ) -> Result<Conversation, StoreError> {
        let responder = self
            .responders
            .get(&responder_id)
            .await?
            .ok_or(StoreError::ResponderNotFound)?;

        let conversation = Conversation {
            id: Uuid::now_v7(),
            owner_id,
            responder_id: responder.id,
            created_at: Utc::now(),
        };

        let created = self.conversations.create(&conversation).await?;
        info!(conversation_id = %created.id, responder = %responder.name, "Conversation created");
        Ok(created)
    }

    /// List the owner's conversations, newest first. Empty when none exist.
    pub async fn list_conversations(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<Conversation>, StoreError> {
        Ok(self.conversations.list_for_owner(owner_id).await?)
    }

    /// Look up one conversation by id, scoped to its owner.
    ///
    /// Returns `None` both when the conversation does not exist and when it
    /// belongs to another account; the two cases are indistinguishable so
    /// that foreign conversation ids leak nothing.
    pub async fn get_conversation(
        &self,
        owner_id: &Uuid,
        conversation_id: &Uuid,
    ) -> Result<Option<Conversation>, StoreError> {
        Ok(self
            .conversations
            .get_for_owner(owner_id, conversation_id)
            .await?)
    }

    /// Append a message to a conversation.
    ///
    /// Content is trimmed and bounds-checked (1-128 characters). A
    /// caller-supplied `sent_at` is honored only for user-authored messages
    /// (client-perceived send time); responder messages are always stamped
    /// at append time.
    pub async fn append_message(
        &self,
        conversation_id: Uuid,
        author_kind: AuthorKind,
        author_id: Uuid,
        content: &str,
        sent_at: Option<DateTime<Utc>>,
    ) -> Result<Message, StoreError> {
        let content = normalize_content(content)?;

        let created_at = match (author_kind, sent_at) {
            (AuthorKind::User, Some(ts)) => ts,
            _ => Utc::now(),
        };

        let message = Message {
            id: Uuid::now_v7(),
            conversation_id,
            author_kind,
            author_id,
            content,
            created_at,
        };

        self.conversations.save_message(&message).await?;
        Ok(message)
    }

    /// Messages of a conversation, ascending by creation timestamp.
    pub async fn list_messages(
        &self,
        conversation_id: &Uuid,
    ) -> Result<Vec<Message>, StoreError> {
        Ok(self.conversations.list_messages(conversation_id).await?)
    }

    /// Number of messages in a conversation.
    pub async fn count_messages(&self, conversation_id: &Uuid) -> Result<u32, StoreError> {
        Ok(self.conversations.count_messages(conversation_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryConversationRepository, InMemoryResponderRepository};
    use colloquy_types::error::ContentError;
    use colloquy_types::responder::{Responder, ResponderKind};

    fn store() -> ConversationStore<InMemoryConversationRepository, InMemoryResponderRepository> {
        ConversationStore::new(
            InMemoryConversationRepository::new(),
            InMemoryResponderRepository::new(),
        )
    }

    async fn seed_responder(
        store: &ConversationStore<InMemoryConversationRepository, InMemoryResponderRepository>,
    ) -> Responder {
        let responder = Responder::new("default", ResponderKind::None, None).unwrap();
        store.responders().upsert(&responder).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_conversation_requires_responder() {
        let store = store();
        let err = store
            .create_conversation(Uuid::now_v7(), Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ResponderNotFound));
    }

    #[tokio::test]
    async fn test_create_and_get_conversation() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();

        let conversation = store
            .create_conversation(owner, responder.id)
            .await
            .unwrap();

        let found = store
            .get_conversation(&owner, &conversation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, conversation.id);
        assert_eq!(found.responder_id, responder.id);
    }

    #[tokio::test]
    async fn test_get_conversation_hides_foreign_owner() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();
        let stranger = Uuid::now_v7();

        let conversation = store
            .create_conversation(owner, responder.id)
            .await
            .unwrap();

        let found = store
            .get_conversation(&stranger, &conversation.id)
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_conversations_newest_first() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();

        let first = store.create_conversation(owner, responder.id).await.unwrap();
        let second = store.create_conversation(owner, responder.id).await.unwrap();

        let listed = store.list_conversations(&owner).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        let other = store.list_conversations(&Uuid::now_v7()).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_append_message_trims_content() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();
        let conversation = store.create_conversation(owner, responder.id).await.unwrap();

        let message = store
            .append_message(conversation.id, AuthorKind::User, owner, "  hello  ", None)
            .await
            .unwrap();
        assert_eq!(message.content, "hello");
    }

    #[tokio::test]
    async fn test_append_message_rejects_out_of_bounds_content() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();
        let conversation = store.create_conversation(owner, responder.id).await.unwrap();

        let err = store
            .append_message(conversation.id, AuthorKind::User, owner, "   ", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidContent(ContentError::Empty)
        ));

        let long = "x".repeat(129);
        let err = store
            .append_message(conversation.id, AuthorKind::User, owner, &long, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidContent(ContentError::TooLong { .. })
        ));

        assert_eq!(store.count_messages(&conversation.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_caller_timestamp_only_for_user_messages() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();
        let conversation = store.create_conversation(owner, responder.id).await.unwrap();

        let sent_at = Utc::now() - chrono::Duration::minutes(5);

        let user_msg = store
            .append_message(
                conversation.id,
                AuthorKind::User,
                owner,
                "hi",
                Some(sent_at),
            )
            .await
            .unwrap();
        assert_eq!(user_msg.created_at, sent_at);

        let responder_msg = store
            .append_message(
                conversation.id,
                AuthorKind::Responder,
                responder.id,
                "hello",
                Some(sent_at),
            )
            .await
            .unwrap();
        // Supplied timestamp is ignored for responder-authored messages.
        assert!(responder_msg.created_at > sent_at);
    }

    #[tokio::test]
    async fn test_list_messages_ascending() {
        let store = store();
        let responder = seed_responder(&store).await;
        let owner = Uuid::now_v7();
        let conversation = store.create_conversation(owner, responder.id).await.unwrap();

        for content in ["one", "two", "three"] {
            store
                .append_message(conversation.id, AuthorKind::User, owner, content, None)
                .await
                .unwrap();
        }

        let messages = store.list_messages(&conversation.id).await.unwrap();
        assert_eq!(messages.len(), 3);
        for pair in messages.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }
}
