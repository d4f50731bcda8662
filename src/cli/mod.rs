//! CLI module for datenbot
//!
//! Argument parsing via clap with a structured command pattern: each
//! subcommand pairs an Args struct with a Command struct that executes it.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::post::{PostArgs, PostCommand};
use commands::preview::{PreviewArgs, PreviewCommand};
use commands::serve::{ServeArgs, ServeCommand};

#[derive(Parser)]
#[command(name = "datenbot")]
#[command(version)]
#[command(about = "Slack bot for new and updated Berlin open data portal datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Slack webhook server
    Serve(ServeArgs),

    /// Fetch the catalog and print the summary to stdout
    Preview(PreviewArgs),

    /// Fetch the catalog once and post the summary to a channel
    Post(PostArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => ServeCommand::new(args).execute().await,
            Commands::Preview(args) => PreviewCommand::new(args).execute().await,
            Commands::Post(args) => PostCommand::new(args).execute().await,
        }
    }
}
