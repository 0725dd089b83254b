use clap::Parser;

use notes_server::api;
use notes_server::config::{Cli, Commands, ServeConfig};
use notes_server::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_dir.as_deref())?;

    match cli.into_command() {
        Commands::Serve(config) => serve(config).await?,
        Commands::Migrate(storage) => {
            storage.open_database()?;
            tracing::info!("Database schema is up to date");
        }
    }

    Ok(())
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    tracing::info!("Starting notes server on {}", addr);

    let db = config.storage.open_database()?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Notes server listening on http://{}", addr);

    api::serve(listener, db, shutdown_signal()).await?;

    tracing::info!("Notes server stopped");
    Ok(())
}

/// Resolves on Ctrl-C; open requests are allowed to finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
