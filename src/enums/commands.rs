use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file.
    Init,
    /// Load the configuration and print the effective settings.
    Validate,
    /// Probe the review server's health endpoint.
    Health {
        /// Keep probing on the configured interval until interrupted.
        #[clap(short, long)]
        watch: bool,
    },
    /// Submit one analysis per pull request URL and wait for the results.
    Analyze {
        #[clap(required = true)]
        pr_urls: Vec<String>,
        /// Comma separated list of checks to run; every other check is disabled.
        #[clap(long, value_name = "CHECKS")]
        only: Option<String>,
        /// Disable a single check (repeatable).
        #[clap(long, value_name = "CHECK")]
        skip: Vec<String>,
        #[clap(long, value_name = "MS")]
        poll_interval_ms: Option<u64>,
        #[clap(long, value_name = "MS")]
        timeout_ms: Option<u64>,
        /// Pretty-print result JSON.
        #[clap(long)]
        pretty: bool,
    },
    /// Fetch the current view of a single analysis job.
    Status {
        job_id: String,
    },
}
