//! Main entry point for the notes service.
//!
//! Resolves configuration from the environment once at startup, opens the
//! notes service (loading any persisted collection), and serves the REST
//! API.
//!
//! # Environment Variables
//! - `NOTES_PORT`: Listen port (default: 3000)
//! - `NOTES_ENV`: `development` or `production` (default: development);
//!   production redacts unexpected-error messages in 500 responses
//! - `NOTES_DATA_FILE`: Path of the persisted notes file (default: notes.json)
//!
//! # Returns
//! * `Ok(())` - If the server starts and runs successfully
//! * `Err(anyhow::Error)` - If startup or runtime fails

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use notes_core::{
    CoreConfig, DEFAULT_DATA_FILE,
    config::{env_mode_from_env_value, port_from_env_value},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port_from_env_value(std::env::var("NOTES_PORT").ok())?;
    let env_mode = env_mode_from_env_value(std::env::var("NOTES_ENV").ok())?;
    let data_file = std::env::var("NOTES_DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("++ Starting notes service on {}", addr);
    tracing::info!(data_file = %data_file.display(), env = ?env_mode, "resolved configuration");

    let cfg = Arc::new(CoreConfig::new(data_file, env_mode));
    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
