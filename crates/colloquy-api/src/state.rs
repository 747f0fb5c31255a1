//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over repository/transport/hasher traits, but
//! AppState pins them to the concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use colloquy_core::account::AccountService;
use colloquy_core::conversation::ConversationStore;
use colloquy_core::dispatch::ResponseDispatcher;
use colloquy_infra::config::load_config;
use colloquy_infra::crypto::password::Argon2PasswordHasher;
use colloquy_infra::generate::HttpGenerateClient;
use colloquy_infra::sqlite::account::SqliteAccountRepository;
use colloquy_infra::sqlite::conversation::SqliteConversationRepository;
use colloquy_infra::sqlite::pool::DatabasePool;
use colloquy_infra::sqlite::responder::SqliteResponderRepository;
use colloquy_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteStore = ConversationStore<SqliteConversationRepository, SqliteResponderRepository>;

pub type ConcreteDispatcher = ResponseDispatcher<
    SqliteConversationRepository,
    SqliteResponderRepository,
    HttpGenerateClient,
>;

pub type ConcreteAccountService = AccountService<SqliteAccountRepository, Argon2PasswordHasher>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConcreteStore>,
    pub dispatcher: Arc<ConcreteDispatcher>,
    pub account_service: Arc<ConcreteAccountService>,
    pub config: AppConfig,
    pub token_secret: Arc<String>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init(data_dir: &Path) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(data_dir).await?;

        let config = load_config(data_dir).await;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("colloquy.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        // Store used by the HTTP handlers
        let store = ConversationStore::new(
            SqliteConversationRepository::new(db_pool.clone()),
            SqliteResponderRepository::new(db_pool.clone()),
        );

        // The dispatcher owns its own store instance over the same pool
        let dispatcher = ResponseDispatcher::new(
            ConversationStore::new(
                SqliteConversationRepository::new(db_pool.clone()),
                SqliteResponderRepository::new(db_pool.clone()),
            ),
            HttpGenerateClient::new(Duration::from_secs(config.generate_timeout_secs)),
        );

        let account_service = AccountService::new(
            SqliteAccountRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
        );

        let token_secret = crate::http::extractors::auth::ensure_token_secret(data_dir).await?;

        Ok(Self {
            store: Arc::new(store),
            dispatcher: Arc::new(dispatcher),
            account_service: Arc::new(account_service),
            config,
            token_secret: Arc::new(token_secret),
            data_dir: data_dir.to_path_buf(),
            db_pool,
        })
    }
}
