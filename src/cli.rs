use clap::Parser;
use std::path::PathBuf;

/// Search GitHub repositories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "reposearch", version, about)]
pub struct Args {
    /// Path to the config file (default: <config dir>/reposearch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured initial query
    #[arg(long, short, value_name = "TEXT")]
    pub query: Option<String>,

    /// Run one search, print the results and exit
    #[arg(long)]
    pub once: bool,

    /// Print results as JSON (with --once)
    #[arg(long, requires = "once")]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "reposearch=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
