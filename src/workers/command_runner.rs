use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use futures::future::join_all;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::duration_millis;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, ReviewError, ReviewResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::health_monitor::HealthMonitor;
use crate::services::http_transport::HttpTransport;
use crate::services::job_poller::JobPoller;
use crate::services::retry_middleware::RetryMiddleware;
use crate::services::review_client::ReviewClient;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::enabled_checks::EnabledChecks;
use crate::structs::health_snapshot::HealthSnapshot;
use crate::structs::job::JobId;
use crate::structs::poll_options::PollOptions;
use crate::structs::retry_policy::RetryPolicy;

/// Options of the `analyze` command after clap parsing.
pub struct AnalyzeArgs {
    pub pr_urls: Vec<String>,
    pub only: Option<String>,
    pub skip: Vec<String>,
    pub poll_interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub pretty: bool,
}

/// Executes one CLI command. `Ok(false)` means the command ran but reported
/// failures of its own (an offline server, a failed analysis).
pub struct CommandRunner {
    config_path: Option<PathBuf>,
    api_url: Option<String>,
    quiet: bool,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            api_url: cli.api_url.clone(),
            quiet: cli.quiet,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<bool> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Health { watch } => self.health_command(watch).await,
            Commands::Analyze { pr_urls, only, skip, poll_interval_ms, timeout_ms, pretty } => {
                self.analyze_command(AnalyzeArgs { pr_urls, only, skip, poll_interval_ms, timeout_ms, pretty })
                    .await
            }
            Commands::Status { job_id } => self.status_command(&job_id).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ReviewResult<Config> {
        ConfigManager::resolve(self.config_path.as_deref(), self.api_url.clone())
    }

    async fn init_command(&self) -> ReviewResult<bool> {
        log::info!("🚀 Initializing pr-review configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔧 Run 'pr-review validate' to check your configuration.");
        Ok(true)
    }

    async fn validate_command(&self) -> ReviewResult<bool> {
        log::info!("🔍 Validating pr-review configuration...");

        let config = self.load_config()?;
        log::info!("✅ Configuration is valid");
        println!("{}", toml::to_string_pretty(&config)?);
        Ok(true)
    }

    async fn health_command(&self, watch: bool) -> ReviewResult<bool> {
        let config = self.load_config()?;
        let transport = Arc::new(HttpTransport::new(&config.server)?);
        log::info!("🩺 Checking {}", transport.base_url());

        if !watch {
            let status = HealthMonitor::check_health(transport.as_ref()).await;
            Self::print_json(&HealthSnapshot::observed(status), false)?;
            return Ok(status.is_online());
        }

        let monitor = HealthMonitor::start(transport, duration_millis(config.health.interval_ms));
        let mut gate = monitor.gate();
        log::info!("⏹️  Press Ctrl+C to stop");

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                snapshot = gate.next() => match snapshot {
                    Some(snapshot) => Self::print_json(&snapshot, false)?,
                    None => break,
                },
            }
        }

        let online = monitor.current().status.is_online();
        monitor.stop().await;
        Ok(online)
    }

    async fn analyze_command(&self, args: AnalyzeArgs) -> ReviewResult<bool> {
        let config = self.load_config()?;

        let checks = Self::resolve_checks(config.checks, args.only.as_deref(), &args.skip)?;
        log::info!("🧪 Checks: {}", checks.enabled_names().join(", "));

        let requests = args
            .pr_urls
            .iter()
            .map(|url| AnalysisRequest::from_pr_url(url, checks))
            .collect::<ReviewResult<Vec<_>>>()?;

        let mut poll_options = PollOptions::from(&config.polling);
        if let Some(ms) = args.poll_interval_ms {
            poll_options.interval = duration_millis(ms.max(1));
        }
        if let Some(ms) = args.timeout_ms {
            poll_options.timeout = duration_millis(ms);
        }

        let transport = Arc::new(HttpTransport::new(&config.server)?);
        let monitor = HealthMonitor::start(transport.clone(), duration_millis(config.health.interval_ms));
        let client = ReviewClient::new(transport, RetryPolicy::from(&config.retry), poll_options, monitor.gate());

        let mut spinner = (!self.quiet && std::io::stderr().is_terminal())
            .then(|| AnimatedLogger::new(format!("🔍 Analyzing {} pull request(s)", requests.len())));
        if let Some(spinner) = spinner.as_mut() {
            spinner.start();
        }

        let outcomes = {
            let spinner = spinner.as_ref();
            join_all(requests.iter().map(|request| {
                let client = &client;
                async move {
                    let outcome = client
                        .analyze_with(request, |job| {
                            if let Some(spinner) = spinner {
                                spinner.update(format!("{} #{}: {}", request.repo(), request.pr_number(), job.status));
                            }
                        })
                        .await;
                    (request.pr_url().to_string(), outcome)
                }
            }))
            .await
        };

        monitor.stop().await;

        if let Some(spinner) = spinner.as_mut() {
            if outcomes.iter().all(|(_, outcome)| outcome.is_ok()) {
                spinner.stop("Analysis complete").await;
            } else {
                spinner.error("Analysis finished with errors").await;
            }
        }

        let mut failures: Vec<(String, ReviewError)> = Vec::new();
        let single = outcomes.len() == 1;
        for (pr_url, outcome) in outcomes {
            match outcome {
                Ok(result) if single => Self::print_json(&result, args.pretty)?,
                Ok(result) => Self::print_json(&serde_json::json!({ "pr_url": pr_url, "result": result }), args.pretty)?,
                Err(error) => failures.push((pr_url, error)),
            }
        }

        match failures.as_slice() {
            [] => Ok(true),
            [(_, error)] => {
                ErrorHandler::handle_error(error);
                Ok(false)
            }
            _ => {
                ErrorHandler::handle_multiple_errors(&failures);
                Ok(false)
            }
        }
    }

    async fn status_command(&self, job_id: &str) -> ReviewResult<bool> {
        let config = self.load_config()?;
        let job_id = Self::parse_job_id(job_id)?;

        let transport = Arc::new(HttpTransport::new(&config.server)?);
        let poller = JobPoller::new(RetryMiddleware::new(transport, RetryPolicy::from(&config.retry)));

        let job = poller.fetch(&job_id).await?;
        Self::print_json(&job, true)?;
        Ok(true)
    }

    pub fn parse_job_id(raw: &str) -> ReviewResult<JobId> {
        JobId::new(raw.trim()).ok_or_else(|| ReviewError::invalid_input("job id", "must be a non-empty id other than '.' or '..'"))
    }

    pub fn resolve_checks(base: EnabledChecks, only: Option<&str>, skip: &[String]) -> ReviewResult<EnabledChecks> {
        let mut checks = match only {
            Some(list) => EnabledChecks::only(list)?,
            None => base,
        };
        for name in skip {
            checks.set(name, false)?;
        }

        if checks.enabled_names().is_empty() {
            return Err(ReviewError::config_error("every check is disabled", Some("checks")));
        }
        Ok(checks)
    }

    fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> ReviewResult<()> {
        let rendered = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", rendered);
        Ok(())
    }
}
