//! Service-level error types.

use thiserror::Error;

use crate::dao::storage::StorageError;

/// Failure raised by a game service operation.
///
/// Expected conditions (document absent, insert rejected) never appear here;
/// those go to the service's error log.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An operation needing a loaded document ran before one was loaded.
    #[error("no game document loaded; retrieve or set one first")]
    NoGameLoaded,
    /// The backend failed outside the expected-failure taxonomy.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure raised while building the settings view.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The service has no document to read settings from.
    #[error("no game document loaded; retrieve one before reading settings")]
    NoGameLoaded,
    /// The document carries no settings block. Nothing is defaulted.
    #[error("game document `{name}` carries no settings block")]
    MissingSettings {
        /// Name of the offending document.
        name: String,
    },
    /// A settings timestamp does not match `DD/MM/YYYY - HH:MM`.
    #[error("settings field `{field}` is not a `DD/MM/YYYY - HH:MM` timestamp")]
    InvalidTimestamp {
        /// Which of the two timestamp fields failed to parse.
        field: &'static str,
        /// Parser failure detail.
        #[source]
        source: chrono::ParseError,
    },
}
