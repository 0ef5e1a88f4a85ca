//! LINE Messaging API Client
//!
//! Webhook signature verification, webhook payload model, and reply
//! delivery for the LINE Messaging API.

mod client;
mod signature;
mod webhook;

pub use client::LineClient;
pub use signature::{sign, verify_signature};
pub use webhook::{MessagePayload, WebhookEvent, WebhookPayload};

use thiserror::Error;

/// Errors from the LINE Messaging API client
#[derive(Debug, Error)]
pub enum LineError {
    /// Transport-level failure reaching the reply endpoint
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The reply endpoint answered with a non-success status
    #[error("Reply API returned {status}: {body}")]
    ReplyRejected { status: u16, body: String },
}
