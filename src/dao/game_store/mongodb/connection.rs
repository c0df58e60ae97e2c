use mongodb::{Client, options::ClientOptions};
use tracing::debug;

use super::error::{MongoDaoError, MongoResult};
use crate::config::StoreConfig;

/// Build a client for the configured cluster. The driver connects on first
/// operation; nothing is pinged here.
pub(super) async fn build_client(config: &StoreConfig) -> MongoResult<Client> {
    let url = config.connection_url();
    let options = ClientOptions::parse(&url)
        .await
        .map_err(|source| MongoDaoError::InvalidUrl { url, source })?;

    let client = Client::with_options(options)
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    debug!(instance = %config.instance, database = %config.database_name, "MongoDB client ready");
    Ok(client)
}
