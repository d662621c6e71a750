mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Some(e) = config::dotenv_problem(&dotenv) {
        tracing::warn!(error = %e, ".env file could not be loaded");
    }

    run().await.inspect_err(|e| tracing::error!(error = %e, "portfolio server stopped"))
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = routes::leptos_options().map_err(StartupError::Leptos)?;

    if !config.public_dir.is_dir() {
        tracing::warn!(public_dir = %config.public_dir.display(), "asset directory missing; images and styles will not load");
    }

    let app = routes::app(leptos_options, &config.public_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!(port = config.port, public_dir = %config.public_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
