//! Environment-based configuration
//!
//! Secrets and endpoint overrides come from the process environment; `main`
//! loads a `.env` file via dotenvy before this runs. Only `serve` and `post`
//! need the bot token, so the catalog-only paths construct a `Config` without
//! touching Slack credentials.

use crate::errors::{Error, Result};

/// Default bind address for the webhook server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Slack bot token (`xoxb-…`) used for chat.postMessage and reactions.add.
    pub bot_token: String,
    /// Override for the CKAN package_search endpoint.
    pub catalog_url: Option<String>,
    /// Bind address for the webhook server; the CLI flag takes precedence.
    pub bind_addr: Option<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Returns `Error::Config` when `SLACK_BOT_TOKEN` is missing or empty.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("SLACK_BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("SLACK_BOT_TOKEN is not set".to_string()))?;

        Ok(Self {
            bot_token,
            catalog_url: std::env::var("CATALOG_URL").ok().filter(|u| !u.is_empty()),
            bind_addr: std::env::var("BIND_ADDR").ok().filter(|a| !a.is_empty()),
        })
    }
}
