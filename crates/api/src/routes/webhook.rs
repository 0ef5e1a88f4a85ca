//! Webhook Route

use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use line_messaging::{verify_signature, WebhookPayload};
use std::sync::Arc;
use storage::WeatherStore;
use tracing::{error, warn};

/// LINE webhook endpoint.
///
/// 400 when the signature does not check out, 500 when the payload does not
/// parse or a reply cannot be delivered, 200 otherwise. Events are handled
/// in order; a failed reply aborts the remaining events of the batch.
pub async fn callback<S: WeatherStore>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let signature = headers
        .get("x-line-signature")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(&state.channel_secret, signature, &body) {
        warn!("webhook signature verification failed");
        return StatusCode::BAD_REQUEST;
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!(%err, "webhook payload did not parse");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    for event in &payload.events {
        // Non-text events get no reply
        let Some(text) = event.text() else {
            continue;
        };
        let Some(reply_token) = event.reply_token.as_deref() else {
            warn!("text event without reply token, skipping");
            continue;
        };

        let reply = bot::dispatch(&state.store, text).await;

        if let Err(err) = state.line.reply(reply_token, &reply).await {
            error!(%err, "reply delivery failed, aborting batch");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    StatusCode::OK
}
