use anyhow::{self, Error as AnyhowError};
use server::{AppState, ServerError, routes, shutdown_signal};
use services::services::config::load_config_from_file;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};
use utils::assets::config_path;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum QueueDeskError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

fn listen_port() -> Result<u16, ServerError> {
    match std::env::var("BACKEND_PORT").or_else(|_| std::env::var("PORT")) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::InvalidPort(raw.trim().to_string())),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() -> Result<(), QueueDeskError> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},services={level},db={level},utils={level},tower_http={level}",
        level = log_level
    );
    let fmt_filter = EnvFilter::try_new(&filter_string)
        .map_err(|e| anyhow::anyhow!("Failed to create tracing filter: {e}"))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(fmt_filter))
        .init();

    let config_path = config_path();
    tracing::info!("Loading config from {}", config_path.display());
    let config = load_config_from_file(&config_path).await;

    let state = AppState::new(config);
    let app_router = routes::router(state);

    let port = listen_port()?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    let actual_port = listener.local_addr()?.port();

    tracing::info!("Server running on http://{host}:{actual_port}");

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
