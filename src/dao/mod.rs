/// Game document storage backends and the trait they implement.
pub mod game_store;
/// Persisted model definitions.
pub mod models;
/// Storage abstraction layer for backend failures.
pub mod storage;
