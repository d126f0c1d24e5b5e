use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{build_app, settings::Settings};
use common::store::JsonStore;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    info!("Starting attendance service");

    // Create or validate the document before serving
    let store = JsonStore::new(&settings.store_config());
    let doc = store.load().await?;
    info!(
        "Loaded {} classes from {}",
        doc.classes.len(),
        store.path().display()
    );

    let app = build_app(store);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Attendance service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down attendance service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
