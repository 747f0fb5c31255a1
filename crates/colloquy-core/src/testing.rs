//! In-memory fakes shared by the unit tests in this crate.

use std::sync::{Arc, Mutex};

use colloquy_types::account::Account;
use colloquy_types::conversation::{Conversation, Message};
use colloquy_types::error::{AccountError, RepositoryError, TransportError};
use colloquy_types::responder::Responder;
use uuid::Uuid;

use crate::account::hash::PasswordHasher;
use crate::account::repository::AccountRepository;
use crate::conversation::repository::ConversationRepository;
use crate::dispatch::transport::{GenerateRequest, GenerateTransport};
use crate::responder::repository::ResponderRepository;

#[derive(Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<Mutex<Vec<Conversation>>>,
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, conversation: &Conversation) -> Result<Conversation, RepositoryError> {
        self.conversations.lock().unwrap().push(conversation.clone());
        Ok(conversation.clone())
    }

    async fn get_for_owner(
        &self,
        owner_id: &Uuid,
        conversation_id: &Uuid,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == *conversation_id && c.owner_id == *owner_id)
            .cloned())
    }

    async fn list_for_owner(&self, owner_id: &Uuid) -> Result<Vec<Conversation>, RepositoryError> {
        let mut out: Vec<Conversation> = self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == *owner_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn save_message(&self, message: &Message) -> Result<(), RepositoryError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn list_messages(&self, conversation_id: &Uuid) -> Result<Vec<Message>, RepositoryError> {
        let mut out: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.conversation_id == *conversation_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(out)
    }

    async fn count_messages(&self, conversation_id: &Uuid) -> Result<u32, RepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.conversation_id == *conversation_id)
            .count() as u32)
    }

    async fn count_conversations(&self) -> Result<u64, RepositoryError> {
        Ok(self.conversations.lock().unwrap().len() as u64)
    }

    async fn count_all_messages(&self) -> Result<u64, RepositoryError> {
        Ok(self.messages.lock().unwrap().len() as u64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryResponderRepository {
    responders: Arc<Mutex<Vec<Responder>>>,
}

impl InMemoryResponderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponderRepository for InMemoryResponderRepository {
    async fn get(&self, id: &Uuid) -> Result<Option<Responder>, RepositoryError> {
        Ok(self
            .responders
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Responder>, RepositoryError> {
        Ok(self
            .responders
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Responder>, RepositoryError> {
        let mut out = self.responders.lock().unwrap().clone();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn upsert(&self, responder: &Responder) -> Result<Responder, RepositoryError> {
        let mut responders = self.responders.lock().unwrap();
        if let Some(existing) = responders.iter_mut().find(|r| r.name == responder.name) {
            existing.kind = responder.kind.clone();
            existing.endpoint = responder.endpoint.clone();
            return Ok(existing.clone());
        }
        responders.push(responder.clone());
        Ok(responder.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                account.email
            )));
        }
        accounts.push(account.clone());
        Ok(account.clone())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == *id)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn update(&self, account: &Account) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .iter()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                account.email
            )));
        }
        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// Reversible "hasher" so account tests can assert without real Argon2 work.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        Ok(format!("plain:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AccountError> {
        Ok(hash == format!("plain:{password}"))
    }
}

/// What a [`ScriptedTransport`] should do on every call.
pub enum TransportScript {
    Reply(String),
    Unavailable(String),
    Status(u16),
    Malformed(String),
}

/// Generate transport that follows a fixed script and records its calls.
pub struct ScriptedTransport {
    script: TransportScript,
    calls: Mutex<Vec<(String, GenerateRequest)>>,
}

impl ScriptedTransport {
    pub fn new(script: TransportScript) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerateRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

impl GenerateTransport for ScriptedTransport {
    async fn generate(
        &self,
        endpoint: &str,
        request: &GenerateRequest,
    ) -> Result<String, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), request.clone()));

        match &self.script {
            TransportScript::Reply(text) => Ok(text.clone()),
            TransportScript::Unavailable(msg) => Err(TransportError::Request(msg.clone())),
            TransportScript::Status(status) => Err(TransportError::Status { status: *status }),
            TransportScript::Malformed(msg) => Err(TransportError::Malformed(msg.clone())),
        }
    }
}
