mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use social_config::Config;
use social_storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(db) = cli.db {
        config.database.path = db;
    }

    tracing::debug!(path = %config.database.path.display(), "Using database file");

    let storage =
        Storage::new(config.database.path.clone()).with_owner_check(config.database.owner_check);

    match cli.command {
        cli::Commands::Serve { host, port } => {
            commands::serve::handle(storage, config.server, host, port).await
        }
        cli::Commands::Init => commands::init::handle(&storage).await,
        cli::Commands::User(user_cmd) => commands::user::handle(user_cmd, &storage).await,
        cli::Commands::Post(post_cmd) => commands::post::handle(post_cmd, &storage).await,
    }
}
