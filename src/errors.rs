//! Error types shared across the datenbot library
//!
//! CLI entry points work with `anyhow::Result`; the library modules return
//! this typed error so callers can tell a failed catalog fetch apart from a
//! rejected Slack API call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("Slack API error: {0}")]
    Slack(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
