//! Weather Bot - Main Entry Point

use api::{init_logging, AppState, Settings};
use line_messaging::LineClient;
use std::sync::Arc;
use storage::WeatherRepository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Weather Bot v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::from_env()?;

    let store = WeatherRepository::connect(&settings.database_url()).await?;
    let line = LineClient::new(settings.channel_access_token.clone());

    let addr = settings.listen_addr();
    let state = Arc::new(AppState {
        channel_secret: settings.channel_secret.clone(),
        store,
        line,
    });

    api::run_server(&addr, state.clone()).await?;

    state.store.close().await;

    Ok(())
}
