use std::path::PathBuf;

use clap::Parser;

/// Single-run Kerala gold rate tracker. One invocation performs one
/// fetch-classify-notify-persist cycle and exits; scheduling lives
/// outside the process (cron, CI workflow).
#[derive(Debug, Parser)]
#[command(name = "goldmon", version, about)]
pub struct Cli {
    /// Directory holding the persisted state files.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Optional JSON config file overriding the built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the rate source URL for this run.
    #[arg(long)]
    pub url: Option<String>,

    /// Fetch and classify, but skip notifications and persistence.
    #[arg(long)]
    pub dry_run: bool,
}
