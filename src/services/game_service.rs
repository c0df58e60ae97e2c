use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::{debug, warn};

use super::error_log::{ErrorKind, ErrorLogEntry};
use crate::dao::{game_store::GameStore, models::GameDocument};
use crate::error::ServiceError;

const CONTEXT_RETRIEVE: &str = "Retrieve Game";
const CONTEXT_UPDATE: &str = "Update Game";
const CONTEXT_SNAPSHOT: &str = "Save snapshot";

const SNAPSHOT_PREFIX: &str = "snapshot";
const SNAPSHOT_TIME_FORMAT: &str = "%Y%m%d_%H%M";

/// Mediates all reads and writes of the game document.
///
/// Expected failures (document absent, insert rejected) are appended to an
/// in-memory error log instead of being raised; callers inspect the log after
/// an operation to detect them. Infrastructure failures propagate as
/// [`ServiceError::Storage`].
pub struct GameService {
    store: Arc<dyn GameStore>,
    data: Option<GameDocument>,
    error_log: Vec<ErrorLogEntry>,
}

impl GameService {
    /// Start with no document loaded and an empty error log.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            store,
            data: None,
            error_log: Vec::new(),
        }
    }

    /// Currently loaded game document, if any.
    pub fn data(&self) -> Option<&GameDocument> {
        self.data.as_ref()
    }

    /// Replace the in-memory document without touching the backend.
    pub fn set_data(&mut self, document: GameDocument) {
        self.data = Some(document);
    }

    /// Expected failures recorded during this service's lifetime, oldest first.
    pub fn error_log(&self) -> &[ErrorLogEntry] {
        &self.error_log
    }

    /// Fetch the current game document from the backend into `data`.
    ///
    /// A missing document leaves `data` empty and logs a code 1 entry.
    pub async fn retrieve_game(&mut self) -> Result<(), ServiceError> {
        match self.store.find_game().await? {
            Some(document) => {
                debug!(name = %document.name, "retrieved game document");
                self.data = Some(document);
            }
            None => self.log_failure(ErrorKind::NotFound, CONTEXT_RETRIEVE),
        }
        Ok(())
    }

    /// Replace the backend document whose `name` matches the loaded one.
    ///
    /// Never creates a document: a missing target logs a code 1 entry and
    /// leaves the backend untouched.
    pub async fn update_game(&mut self) -> Result<(), ServiceError> {
        let document = self.data.clone().ok_or(ServiceError::NoGameLoaded)?;
        let name = document.name.clone();
        if self.store.replace_game(name.clone(), document).await? {
            debug!(name = %name, "updated game document");
        } else {
            self.log_failure(ErrorKind::NotFound, CONTEXT_UPDATE);
        }
        Ok(())
    }

    /// Insert an immutable, timestamped copy of the loaded document.
    ///
    /// The copy's `name` becomes `snapshot<name><YYYYMMDD_HHMM>` and any
    /// pre-existing identity is stripped so the backend assigns a fresh one.
    /// Returns that identity, or `None` (with a code 2 log entry) when the
    /// backend reported no insert. The loaded document itself is not touched.
    pub async fn save_snapshot_game(&mut self) -> Result<Option<ObjectId>, ServiceError> {
        let current = self.data.as_ref().ok_or(ServiceError::NoGameLoaded)?;
        let mut snapshot = current.clone();
        snapshot.id = None;
        snapshot.name = format!(
            "{SNAPSHOT_PREFIX}{}{}",
            current.name,
            Utc::now().format(SNAPSHOT_TIME_FORMAT)
        );
        let snapshot_name = snapshot.name.clone();

        match self.store.insert_game(snapshot).await? {
            Some(id) => {
                debug!(name = %snapshot_name, %id, "saved game snapshot");
                Ok(Some(id))
            }
            None => {
                self.log_failure(ErrorKind::NotInserted, CONTEXT_SNAPSHOT);
                Ok(None)
            }
        }
    }

    fn log_failure(&mut self, kind: ErrorKind, context: &'static str) {
        warn!(code = kind.code(), context, "{}", kind.message());
        self.error_log.push(ErrorLogEntry::new(kind, context));
    }
}
