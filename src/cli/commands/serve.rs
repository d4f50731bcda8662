//! Serve command: run the Slack webhook server

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::catalog::CatalogClient;
use crate::config::{Config, DEFAULT_BIND_ADDR};
use crate::server::{create_app, AppState};
use crate::slack::SlackClient;

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address, e.g. 0.0.0.0:3000 (overrides BIND_ADDR)
    #[arg(long)]
    pub bind: Option<String>,
}

pub struct ServeCommand {
    args: ServeArgs,
}

impl ServeCommand {
    pub fn new(args: ServeArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self) -> Result<()> {
        let config = Config::from_env()?;

        let bind = self
            .args
            .bind
            .clone()
            .or_else(|| config.bind_addr.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let slack = SlackClient::new(config.bot_token.clone());
        let catalog = match config.catalog_url.clone() {
            Some(url) => CatalogClient::with_url(url),
            None => CatalogClient::new(),
        };

        let app = create_app(AppState::new(slack, catalog));
        let listener = tokio::net::TcpListener::bind(&bind).await?;
        info!("Webhook server listening on {}", bind);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
