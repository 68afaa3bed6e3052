use anyhow::{Context, Result};
use social_config::ServerConfig;
use social_server::Server;
use social_storage::Storage;
use std::sync::Arc;

pub async fn handle(
    storage: Storage,
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    // The server cannot run without its backing file.
    storage
        .ensure_db()
        .await
        .with_context(|| format!("failed to prepare {}", storage.path().display()))?;

    println!("Starting server on {}", config.addr());
    Server::serve(Arc::new(storage), &config).await?;

    Ok(())
}
