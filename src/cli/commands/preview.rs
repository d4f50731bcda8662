//! Preview command: print the summary without touching Slack
//!
//! Operator tool for checking what the bot would post for a given window.

use anyhow::Result;
use clap::Args;

use crate::catalog::{select_recent, CatalogClient};
use crate::summary::render_summary;

#[derive(Args, Clone)]
pub struct PreviewArgs {
    /// Recency window in days
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    /// Override the catalog endpoint URL
    #[arg(long)]
    pub catalog_url: Option<String>,
}

pub struct PreviewCommand {
    args: PreviewArgs,
}

impl PreviewCommand {
    pub fn new(args: PreviewArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self) -> Result<()> {
        let catalog = match self.args.catalog_url.clone() {
            Some(url) => CatalogClient::with_url(url),
            None => CatalogClient::new(),
        };

        let records = catalog.fetch_datasets().await?;
        let selected = select_recent(&records, self.args.days);

        println!("{}", render_summary(&selected, self.args.days));
        Ok(())
    }
}
