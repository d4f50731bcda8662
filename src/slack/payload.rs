//! Inbound webhook payload parsing
//!
//! Slack delivers slash commands form-encoded and Events API callbacks as
//! JSON. Parsing is a pure function over the raw body and content type so it
//! stays independent of the hosting framework; a malformed body yields `None`
//! rather than an error, and dispatch treats that as a no-op.

use serde_json::{Map, Value};

/// Default recency window in days when the command argument is absent or not
/// a number.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Inbound events the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// One-time endpoint verification; the challenge is echoed verbatim.
    UrlVerification { challenge: String },
    /// A slash command invocation.
    SlashCommand {
        command: String,
        text: String,
        channel_id: String,
    },
    /// A plain message posted in a channel the bot is in.
    Message {
        channel: String,
        ts: String,
        bot_id: Option<String>,
        subtype: Option<String>,
    },
    /// Anything else; acknowledged and ignored.
    Other,
}

/// Decode a raw request body into a JSON object.
///
/// Form-encoded bodies become an object of string values; everything else is
/// parsed as JSON. Returns `None` when the body is malformed or does not
/// decode to an object.
pub fn parse_request_body(body: &str, content_type: Option<&str>) -> Option<Value> {
    let is_form = content_type
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    if is_form {
        let mut map = Map::new();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            map.insert(key.into_owned(), Value::String(value.into_owned()));
        }
        if map.is_empty() {
            return None;
        }
        Some(Value::Object(map))
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => Some(value),
            _ => None,
        }
    }
}

/// Classify a decoded payload into the event dispatch takes action on.
pub fn classify(payload: &Value) -> InboundEvent {
    if payload.get("type").and_then(Value::as_str) == Some("url_verification") {
        if let Some(challenge) = payload.get("challenge").and_then(Value::as_str) {
            return InboundEvent::UrlVerification {
                challenge: challenge.to_string(),
            };
        }
        return InboundEvent::Other;
    }

    if let Some(command) = payload.get("command").and_then(Value::as_str) {
        return InboundEvent::SlashCommand {
            command: command.to_string(),
            text: payload
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            channel_id: payload
                .get("channel_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };
    }

    if payload.get("type").and_then(Value::as_str) == Some("event_callback") {
        if let Some(event) = payload.get("event") {
            if event.get("type").and_then(Value::as_str) == Some("message") {
                return InboundEvent::Message {
                    channel: event
                        .get("channel")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    ts: event
                        .get("ts")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    bot_id: event
                        .get("bot_id")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    subtype: event
                        .get("subtype")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                };
            }
        }
    }

    InboundEvent::Other
}

/// Interpret the slash-command argument as a day window.
///
/// Absent or non-numeric text falls back to [`DEFAULT_WINDOW_DAYS`]; a
/// parseable integer is accepted unvalidated, zero and negatives included.
pub fn parse_window_days(text: &str) -> i64 {
    text.trim().parse().unwrap_or(DEFAULT_WINDOW_DAYS)
}
