//! HourCalc HTTP server.

use std::env;

use hourcalc::api::{AppState, create_router};
use hourcalc::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_path = env::var("HOURCALC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let addr = env::var("HOURCALC_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_path)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, config = %config_path, "HourCalc listening");
    axum::serve(listener, router).await?;

    Ok(())
}
