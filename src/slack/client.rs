//! Slack Web API client
//!
//! A thin wrapper over reqwest for the two methods the bot uses. The client
//! is constructed explicitly and handed to each invocation context; there is
//! no process-wide singleton. Slack reports most failures inside a 200
//! response, so the `ok` field of the envelope is checked as well.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::errors::{Error, Result};

/// Base URL of the Slack Web API.
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// Response envelope shared by the Web API methods we call.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
}

pub struct SlackClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_API_URL.to_string())
    }

    /// Create a client against a custom API base URL (for tests).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Post a text message to a channel, optionally threaded.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> Result<()> {
        let mut payload = json!({
            "channel": channel,
            "text": text,
        });
        if let Some(ts) = thread_ts {
            payload["thread_ts"] = json!(ts);
        }

        self.call("chat.postMessage", &payload).await
    }

    /// Add an emoji reaction to a message.
    pub async fn add_reaction(&self, channel: &str, name: &str, timestamp: &str) -> Result<()> {
        let payload = json!({
            "channel": channel,
            "name": name,
            "timestamp": timestamp,
        });

        self.call("reactions.add", &payload).await
    }

    async fn call(&self, method: &str, payload: &serde_json::Value) -> Result<()> {
        let url = format!("{}/{}", self.base_url, method);
        debug!("Calling Slack API method {}", method);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Slack(format!("{} returned HTTP {}", method, status)));
        }

        let body: ApiResponse = response.json().await?;
        if !body.ok {
            return Err(Error::Slack(format!(
                "{} failed: {}",
                method,
                body.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        Ok(())
    }
}
