use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use orderdesk::config::Settings;
use orderdesk::server::ApiServer;
use orderdesk::storage::{OrderStore, PostgresStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let store = Arc::new(PostgresStore::connect(&settings.database)?);

    // Table creation is best-effort at startup; a down database is reported
    // but does not keep the server from listening.
    match store.init_schema().await {
        Ok(()) => info!("Table \"orders\" is ready"),
        Err(e) => error!("Error creating orders table: {}", e),
    }

    ApiServer::new(store as Arc<dyn OrderStore>, settings.port)
        .start()
        .await?;

    Ok(())
}
