//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, identical to what the workspace's
//! main `notes-run` binary serves. Useful for development and debugging of
//! the HTTP layer in isolation.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use notes_core::{
    config::{env_mode_from_env_value, port_from_env_value},
    CoreConfig, DEFAULT_DATA_FILE,
};

/// Main entry point for the notes REST API server
///
/// # Environment Variables
/// - `NOTES_PORT`: Listen port (default: 3000)
/// - `NOTES_ENV`: `development` or `production` (default: development);
///   production redacts unexpected-error messages
/// - `NOTES_DATA_FILE`: Path of the persisted notes file (default: notes.json)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration environment variables are invalid, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("notes_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port_from_env_value(std::env::var("NOTES_PORT").ok())?;
    let env_mode = env_mode_from_env_value(std::env::var("NOTES_ENV").ok())?;
    let data_file = std::env::var("NOTES_DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

    let cfg = Arc::new(CoreConfig::new(data_file, env_mode));
    let app = router(AppState::new(cfg));

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("-- Starting notes REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
