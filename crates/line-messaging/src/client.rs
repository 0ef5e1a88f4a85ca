//! Reply Delivery

use crate::LineError;
use serde_json::json;
use tracing::debug;

const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Client for the LINE reply API
pub struct LineClient {
    http: reqwest::Client,
    access_token: String,
    endpoint: String,
}

impl LineClient {
    /// Create a client authenticated with a channel access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
            endpoint: REPLY_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different reply endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send one text reply keyed to an event's reply token.
    ///
    /// A reply token is single-use, so this is called at most once per
    /// inbound event. Errors are not retried.
    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<(), LineError> {
        debug!(reply_token, "sending reply");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&reply_body(reply_token, text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LineError::ReplyRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Reply request body: exactly one text message per reply token.
fn reply_body(reply_token: &str, text: &str) -> serde_json::Value {
    json!({
        "replyToken": reply_token,
        "messages": [{ "type": "text", "text": text }],
    })
}
