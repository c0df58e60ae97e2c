/// MongoDB-backed implementation.
pub mod mongodb;

#[cfg(test)]
pub(crate) mod memory;

use ::mongodb::bson::oid::ObjectId;
use futures::future::BoxFuture;

use crate::dao::models::GameDocument;
use crate::dao::storage::StorageResult;

/// Abstraction over the document store holding game documents.
///
/// Exactly the four capabilities the persistence layer consumes: backend
/// construction happens on the concrete type, the three operations live here.
/// Expected misses are in-band (`None` / `false`); a `StorageResult` error
/// always means infrastructure trouble.
pub trait GameStore: Send + Sync {
    /// Fetch the first game document in the collection, if any.
    fn find_game(&self) -> BoxFuture<'static, StorageResult<Option<GameDocument>>>;

    /// Replace the document whose `name` matches with `document`, reporting
    /// whether a document matched. Never creates a document.
    fn replace_game(
        &self,
        name: String,
        document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<bool>>;

    /// Insert `document` as a new record, reporting the backend-assigned
    /// identity, or `None` when the backend did not report one.
    fn insert_game(
        &self,
        document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<Option<ObjectId>>>;
}
