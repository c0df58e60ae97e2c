//! Lazily-connected MongoDB game store.

use std::sync::Arc;

use futures::future::BoxFuture;
use mongodb::{Client, Collection, bson::doc, bson::oid::ObjectId};
use tokio::sync::RwLock;

use super::connection::build_client;
use super::error::{MongoDaoError, MongoResult};
use crate::config::StoreConfig;
use crate::dao::{game_store::GameStore, models::GameDocument, storage::StorageResult};

const GAME_COLLECTION_NAME: &str = "games";

/// Game store backed by a MongoDB `games` collection.
#[derive(Clone)]
pub struct MongoGameStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<Option<MongoState>>,
    config: StoreConfig,
}

struct MongoState {
    client: Client,
}

impl MongoGameStore {
    /// Hold on to the configuration. No client is built and no network IO
    /// happens until the first operation runs.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(MongoInner {
                state: RwLock::new(None),
                config,
            }),
        }
    }

    async fn collection(&self) -> MongoResult<Collection<GameDocument>> {
        {
            let guard = self.inner.state.read().await;
            if let Some(state) = guard.as_ref() {
                return Ok(self.collection_of(state));
            }
        }

        let mut guard = self.inner.state.write().await;
        // Another caller may have initialized while we waited for the lock.
        if let Some(state) = guard.as_ref() {
            return Ok(self.collection_of(state));
        }
        let client = build_client(&self.inner.config).await?;
        let state = guard.insert(MongoState { client });
        Ok(self.collection_of(state))
    }

    fn collection_of(&self, state: &MongoState) -> Collection<GameDocument> {
        state
            .client
            .database(&self.inner.config.database_name)
            .collection::<GameDocument>(GAME_COLLECTION_NAME)
    }

    async fn find_game(&self) -> MongoResult<Option<GameDocument>> {
        let collection = self.collection().await?;
        collection
            .find_one(doc! {})
            .await
            .map_err(|source| MongoDaoError::FindGame { source })
    }

    async fn replace_game(&self, name: &str, document: &GameDocument) -> MongoResult<bool> {
        let collection = self.collection().await?;
        let result = collection
            .replace_one(doc! { "name": name }, document)
            .await
            .map_err(|source| MongoDaoError::ReplaceGame {
                name: name.to_owned(),
                source,
            })?;
        Ok(result.matched_count > 0)
    }

    async fn insert_game(&self, document: &GameDocument) -> MongoResult<Option<ObjectId>> {
        let collection = self.collection().await?;
        let result = collection
            .insert_one(document)
            .await
            .map_err(|source| MongoDaoError::InsertGame {
                name: document.name.clone(),
                source,
            })?;
        // Normalize the driver's Bson identity to one explicit outcome.
        Ok(result.inserted_id.as_object_id())
    }
}

impl GameStore for MongoGameStore {
    fn find_game(&self) -> BoxFuture<'static, StorageResult<Option<GameDocument>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game().await.map_err(Into::into) })
    }

    fn replace_game(
        &self,
        name: String,
        document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.replace_game(&name, &document).await.map_err(Into::into) })
    }

    fn insert_game(
        &self,
        document: GameDocument,
    ) -> BoxFuture<'static, StorageResult<Option<ObjectId>>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(&document).await.map_err(Into::into) })
    }
}
