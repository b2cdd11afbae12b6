//! goldmon entry point. One invocation is one tracker cycle; a failed
//! run logs its reason and still exits zero so the outer scheduler
//! keeps its cadence.

mod cli;
mod config;
mod logging;
mod run;

use clap::Parser;

use crate::cli::Cli;
use crate::config::TrackerConfig;

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = match TrackerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            return;
        }
    };

    if let Err(error) = run::execute(&cli, &config).await {
        tracing::error!(%error, "run failed");
    }
}
