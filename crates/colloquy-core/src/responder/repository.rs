//! ResponderRepository trait definition.

use colloquy_types::error::RepositoryError;
use colloquy_types::responder::Responder;
use uuid::Uuid;

/// Repository trait for responder persistence.
///
/// Responders are written only by the seeding step (`upsert`, keyed by the
/// unique name) and read everywhere else.
pub trait ResponderRepository: Send + Sync {
    /// Get a responder by id.
    fn get(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Responder>, RepositoryError>> + Send;

    /// Get a responder by its unique name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<Responder>, RepositoryError>> + Send;

    /// List all responders, ordered by name.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Responder>, RepositoryError>> + Send;

    /// Insert a responder, or update kind/endpoint when the name already
    /// exists. Returns the stored record (the original id is kept on update).
    fn upsert(
        &self,
        responder: &Responder,
    ) -> impl std::future::Future<Output = Result<Responder, RepositoryError>> + Send;
}
