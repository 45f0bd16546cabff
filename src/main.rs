use anyhow::Context;
use userhub::app;
use userhub::config::{AppConfig, ConfigService};
use userhub::lifecycle::shutdown_signal;
use userhub::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before anything reads the environment.
    let settings = ConfigService::new();
    observability::init(&settings);

    let config = AppConfig::from_service(&settings).context("invalid configuration")?;
    tracing::info!("Starting userhub...");

    let (application, router) = app::bootstrap(&config)
        .await
        .context("failed to start application")?;

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!("Listening on http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await
        .context("server error")?;

    application.shutdown().await?;
    tracing::info!("Server stopped");
    Ok(())
}
