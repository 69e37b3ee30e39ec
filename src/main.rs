use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use koereq::application::ports::{ClientFactory, ConfigSource};
use koereq::infrastructure::clients::AzureClientFactory;
use koereq::infrastructure::config::EnvConfigSource;
use koereq::infrastructure::observability::{TracingConfig, init_tracing};
use koereq::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))
        .context("Failed to initialize tracing")?;

    let config_source: Arc<dyn ConfigSource> = Arc::new(EnvConfigSource);
    let clients: Arc<dyn ClientFactory> = Arc::new(
        AzureClientFactory::new(settings.analysis.poll_timeout())
            .context("Failed to build HTTP client")?,
    );

    if settings.auth.function_key.is_none() {
        tracing::warn!("No function key configured; /api routes are unauthenticated");
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState::new(config_source, clients, settings));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
