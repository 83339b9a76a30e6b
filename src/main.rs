//! HTTP server for the tool rental pricing engine.
//!
//! Environment:
//! - `TOOL_RENTAL_CONFIG_DIR`: directory holding `tools.yaml` (default `./config`)
//! - `TOOL_RENTAL_ADDR`: socket address to listen on (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `tool_rental=info`)

use std::env;

use tool_rental::api::{AppState, create_router};
use tool_rental::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tool_rental=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        env::var("TOOL_RENTAL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(config_dir = %config_dir, "Configuration loaded");

    let app = create_router(AppState::new(config));

    let addr = env::var("TOOL_RENTAL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
