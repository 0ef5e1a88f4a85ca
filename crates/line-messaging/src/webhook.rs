//! Webhook Payload Model
//!
//! The subset of the webhook schema this bot consumes: message events
//! carrying text. Every other event type is carried through untyped so the
//! receiver can skip it.

use serde::Deserialize;

/// One webhook delivery: a batch of events for a bot destination
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One event within a delivery
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    /// Opaque token routing exactly one reply back to this event
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessagePayload>,
}

/// Message attached to a message event
#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl WebhookEvent {
    /// Text of this event, if it is a text message event. Stickers, images,
    /// follows and the rest yield `None`.
    pub fn text(&self) -> Option<&str> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }
        message.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_event_parses() {
        let json = r#"{
            "destination": "U0123456789abcdef",
            "events": [{
                "type": "message",
                "replyToken": "0f3779fba3b349968c5d07db31eab56f",
                "source": { "type": "user", "userId": "U4af4980629..." },
                "timestamp": 1462629479859,
                "message": { "id": "325708", "type": "text", "text": "天気教えて 東京" }
            }]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events.len(), 1);

        let event = &payload.events[0];
        assert_eq!(event.text(), Some("天気教えて 東京"));
        assert_eq!(
            event.reply_token.as_deref(),
            Some("0f3779fba3b349968c5d07db31eab56f")
        );
    }

    #[test]
    fn test_non_text_message_has_no_text() {
        let json = r#"{
            "events": [{
                "type": "message",
                "replyToken": "abc",
                "message": { "id": "1", "type": "sticker" }
            }]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events[0].text(), None);
    }

    #[test]
    fn test_follow_event_has_no_text() {
        let json = r#"{ "events": [{ "type": "follow", "replyToken": "abc" }] }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.events[0].text(), None);
    }

    #[test]
    fn test_empty_delivery_parses() {
        let payload: WebhookPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.events.is_empty());
    }
}
