use anyhow::Result;
use clap::Parser;

use datenbot::cli::Cli;
use datenbot::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init_logging();

    let cli = Cli::parse();

    // Execute with error handling
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Application error: {}", e);

            // Log error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                tracing::error!("   Caused by: {}", err);
                source = err.source();
            }

            Err(e)
        }
    }
}
