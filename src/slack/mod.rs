//! Slack integration
//!
//! `payload` parses and classifies inbound webhook bodies; `client` wraps the
//! outbound Web API calls (chat.postMessage, reactions.add).

pub mod client;
pub mod payload;

pub use client::SlackClient;
pub use payload::{classify, parse_request_body, parse_window_days, InboundEvent};
