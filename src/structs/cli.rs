use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "pr-review")]
#[clap(about = "Submit pull requests to the review service and wait for the analysis", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: ~/pr-review/config.toml).
    #[clap(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the review server; overrides config and environment.
    #[clap(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
