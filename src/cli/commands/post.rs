//! Post command: one-shot summary post to a channel
//!
//! Runs the same pipeline as the slash command, triggered from the command
//! line instead of a webhook. Suitable for an external scheduler.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::catalog::{select_recent, CatalogClient};
use crate::config::Config;
use crate::slack::SlackClient;
use crate::summary::render_summary;

#[derive(Args, Clone)]
pub struct PostArgs {
    /// Channel ID to post the summary to
    #[arg(long)]
    pub channel: String,

    /// Recency window in days
    #[arg(long, default_value_t = 7)]
    pub days: i64,
}

pub struct PostCommand {
    args: PostArgs,
}

impl PostCommand {
    pub fn new(args: PostArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self) -> Result<()> {
        let config = Config::from_env()?;

        let catalog = match config.catalog_url.clone() {
            Some(url) => CatalogClient::with_url(url),
            None => CatalogClient::new(),
        };
        let slack = SlackClient::new(config.bot_token.clone());

        let records = catalog.fetch_datasets().await?;
        let selected = select_recent(&records, self.args.days);
        info!(
            newest = selected.newest.len(),
            updated = selected.updated.len(),
            "Posting summary to {}",
            self.args.channel
        );

        let summary = render_summary(&selected, self.args.days);
        slack.post_message(&self.args.channel, &summary, None).await?;

        Ok(())
    }
}
