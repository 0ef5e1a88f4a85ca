//! Webhook Signature Verification
//!
//! LINE signs each webhook delivery with HMAC-SHA256 over the raw request
//! body, keyed by the channel secret, and sends the digest base64-encoded
//! in the `x-line-signature` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64-encoded HMAC-SHA256 signature for a request body.
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Check a caller-supplied signature against the channel secret.
///
/// The digest comparison is constant-time. Malformed base64 counts as a
/// failed verification.
pub fn verify_signature(channel_secret: &str, signature: &str, body: &[u8]) -> bool {
    let Ok(claimed) = STANDARD.decode(signature) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);
    mac.verify_slice(&claimed).is_ok()
}
