//! Thin entrypoint: load the environment configuration, open the store, and
//! report the current game and its settings.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pere_blaise_store::config::StoreConfig;
use pere_blaise_store::dao::game_store::mongodb::MongoGameStore;
use pere_blaise_store::services::{game_service::GameService, settings_service::SettingsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = StoreConfig::from_env().context("loading MongoDB configuration")?;
    let store = MongoGameStore::new(config);
    let mut service = GameService::new(Arc::new(store));

    service.retrieve_game().await.context("retrieving game")?;
    let Some(data) = service.data() else {
        for entry in service.error_log() {
            warn!(
                code = entry.error_code(),
                context = entry.context(),
                "{}",
                entry.error_msg()
            );
        }
        return Ok(());
    };
    info!(name = %data.name, game = data.game, "game document loaded");

    match SettingsService::from_service(&service) {
        Ok(settings) => info!(
            players = ?settings.players(),
            elapsed_minutes = settings.elapsed().num_minutes(),
            "settings view ready"
        ),
        Err(err) => warn!(error = %err, "settings unavailable"),
    }

    Ok(())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
