/// Append-only log of expected operation failures.
pub mod error_log;
/// Game document lifecycle: retrieve, update, snapshot.
pub mod game_service;
/// Typed read-only view over a document's settings block.
pub mod settings_service;
