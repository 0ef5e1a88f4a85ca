//! Weather Bot API Server
//!
//! Receives LINE webhook deliveries, dispatches the commands they carry,
//! and replies through the LINE Messaging API.

use axum::{routing::post, Router};
use line_messaging::LineClient;
use std::sync::Arc;
use storage::WeatherStore;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use crate::config::Settings;

/// Application state shared across handlers.
///
/// Built once at startup and passed by reference into the webhook handler;
/// nothing in it is mutated between requests.
pub struct AppState<S> {
    /// Webhook signature key
    pub channel_secret: String,
    /// Weather record store
    pub store: S,
    /// Reply client
    pub line: LineClient,
}

/// Create the application router
pub fn create_router<S: WeatherStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/callback", post(routes::webhook::callback::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Bind the listener and serve until the task is stopped.
pub async fn run_server<S: WeatherStore + 'static>(
    addr: &str,
    state: Arc<AppState<S>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    info!("Starting webhook server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
