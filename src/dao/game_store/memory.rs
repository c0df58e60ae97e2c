//! In-process game store used by the unit tests, standing in for a real
//! backend the way a mock client would.

use std::sync::Mutex;

use futures::future::BoxFuture;
use mongodb::bson::oid::ObjectId;

use super::GameStore;
use crate::dao::{models::GameDocument, storage::StorageResult};

#[derive(Default)]
pub(crate) struct MemoryGameStore {
    documents: Mutex<Vec<GameDocument>>,
    reject_inserts: bool,
}

impl MemoryGameStore {
    pub(crate) fn with_documents(documents: Vec<GameDocument>) -> Self {
        Self {
            documents: Mutex::new(documents),
            reject_inserts: false,
        }
    }

    /// Store whose backend reports no inserted identity, as a driver does
    /// on an unacknowledged write.
    pub(crate) fn rejecting_inserts() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            reject_inserts: true,
        }
    }

    pub(crate) fn documents(&self) -> Vec<GameDocument> {
        self.documents.lock().unwrap().clone()
    }
}

impl GameStore for MemoryGameStore {
    fn find_game(&self) -> BoxFuture<'static, StorageResult<Option<GameDocument>>> {
        let result = Ok(self.documents.lock().unwrap().first().cloned());
        Box::pin(async move { result })
    }

    fn replace_game(
        &self,
        name: String,
        document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let mut documents = self.documents.lock().unwrap();
        let matched = match documents.iter_mut().find(|doc| doc.name == name) {
            Some(existing) => {
                *existing = document;
                true
            }
            None => false,
        };
        Box::pin(async move { Ok(matched) })
    }

    fn insert_game(
        &self,
        mut document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<Option<ObjectId>>> {
        let inserted_id = if self.reject_inserts {
            None
        } else {
            let id = ObjectId::new();
            document.id = Some(id);
            self.documents.lock().unwrap().push(document);
            Some(id)
        };
        Box::pin(async move { Ok(inserted_id) })
    }
}
