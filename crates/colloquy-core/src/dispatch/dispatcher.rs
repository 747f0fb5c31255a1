//! Response dispatcher: from a stored user message to a stored reply.

use colloquy_types::conversation::{AuthorKind, Conversation, Message};
use colloquy_types::error::{DispatchError, StoreError};
use tracing::{info, warn};

use crate::conversation::repository::ConversationRepository;
use crate::conversation::store::ConversationStore;
use crate::dispatch::canned::CannedCatalog;
use crate::dispatch::strategy::ReplyStrategy;
use crate::dispatch::transport::GenerateTransport;
use crate::responder::repository::ResponderRepository;

/// Produces and persists exactly one reply per dispatched user message.
///
/// Holds no persistent state of its own: it reads the responder, runs the
/// selected strategy, and appends the result through the conversation
/// store. The user message is already durable when `generate_reply` is
/// called, so every failure leaves the conversation ending in that user
/// message and nothing else.
pub struct ResponseDispatcher<C, R, T>
where
    C: ConversationRepository,
    R: ResponderRepository,
    T: GenerateTransport,
{
    store: ConversationStore<C, R>,
    transport: T,
    catalog: CannedCatalog,
}

impl<C, R, T> ResponseDispatcher<C, R, T>
where
    C: ConversationRepository,
    R: ResponderRepository,
    T: GenerateTransport,
{
    /// Create a dispatcher over the given store and transport, with the
    /// default canned catalog.
    pub fn new(store: ConversationStore<C, R>, transport: T) -> Self {
        Self::with_catalog(store, transport, CannedCatalog::default())
    }

    /// Create a dispatcher with a custom canned catalog.
    pub fn with_catalog(
        store: ConversationStore<C, R>,
        transport: T,
        catalog: CannedCatalog,
    ) -> Self {
        Self {
            store,
            transport,
            catalog,
        }
    }

    /// Generate, persist, and return the reply to `user_message`.
    ///
    /// Single attempt: strategy failures are terminal and persist nothing.
    pub async fn generate_reply(
        &self,
        conversation: &Conversation,
        user_message: &Message,
    ) -> Result<Message, DispatchError> {
        let responder = self
            .store
            .responders()
            .get(&conversation.responder_id)
            .await
            .map_err(StoreError::from)?
            .ok_or(DispatchError::ResponderNotFound)?;

        let strategy = ReplyStrategy::for_responder(&responder, &self.transport, &self.catalog)?;

        let text = match strategy.generate(&user_message.content).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    conversation_id = %conversation.id,
                    responder = %responder.name,
                    error = %err,
                    "Reply generation failed; user message preserved"
                );
                return Err(err);
            }
        };

        // Reply is timestamped at generation time; append_message ignores
        // caller timestamps for responder-authored messages anyway.
        let reply = self
            .store
            .append_message(
                conversation.id,
                AuthorKind::Responder,
                responder.id,
                &text,
                None,
            )
            .await?;

        info!(
            conversation_id = %conversation.id,
            responder = %responder.name,
            reply_id = %reply.id,
            "Reply persisted"
        );

        Ok(reply)
    }
}
