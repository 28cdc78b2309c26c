use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;

use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# PR Review client configuration

[server]
# Base address of the review service. PR_REVIEW_API_URL overrides this.
base_url = "http://localhost:8000"
# Per-request transport timeout
request_timeout_ms = 30000

[retry]
# Total attempts per request, counting the first one.
# Only network failures and 5xx responses are retried.
max_attempts = 3
delay_ms = 1000

[polling]
interval_ms = 1000
# Give up waiting for a job after this long
timeout_ms = 60000

[health]
interval_ms = 30000

# Checks requested for every analysis unless overridden with --only / --skip
[checks]
style = true
complexity = true
security = true
performance = true
ai_feedback = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the file layer. An explicit path must exist; a missing default
    /// file just means defaults.
    pub fn load(path: Option<&Path>) -> ReviewResult<Config> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Config::default()),
            },
        };

        if !config_path.exists() {
            if explicit {
                return Err(ReviewError::config_error(
                    &format!("config file not found: {}", config_path.display()),
                    None,
                ));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| ReviewError::io_error(&format!("reading {}", config_path.display()), &e.to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ReviewResult<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Layers defaults < file < environment < command line, then validates.
    pub fn resolve(path: Option<&Path>, cli_api_url: Option<String>) -> ReviewResult<Config> {
        let mut config = Self::load(path)?;
        Self::apply_api_url(&mut config, std::env::var(API_URL_ENV).ok());
        Self::apply_api_url(&mut config, cli_api_url);

        Self::validate_config(&config).map_err(|errors| {
            ReviewError::config_error(&errors.join("; "), None)
        })?;
        Ok(config)
    }

    pub fn apply_api_url(config: &mut Config, api_url: Option<String>) {
        if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            config.server.base_url = url;
        }
    }

    pub fn create_sample_config(path: Option<&Path>) -> ReviewResult<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()
                .ok_or_else(|| ReviewError::config_error("could not determine the home directory", None))?,
        };

        if config_path.exists() {
            return Err(ReviewError::config_error(
                &format!("{} already exists, refusing to overwrite it", config_path.display()),
                None,
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ReviewError::io_error(&format!("creating {}", parent.display()), &e.to_string()))?;
        }
        fs::write(&config_path, SAMPLE_CONFIG)
            .map_err(|e| ReviewError::io_error(&format!("writing {}", config_path.display()), &e.to_string()))?;

        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.server.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("server.base_url must be http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("server.base_url '{}' is not a URL: {}", config.server.base_url, e)),
        }

        if config.server.request_timeout_ms == 0 {
            errors.push("server.request_timeout_ms must be greater than zero".to_string());
        }
        if config.retry.max_attempts == 0 {
            errors.push("retry.max_attempts must be at least 1".to_string());
        }
        if config.polling.interval_ms == 0 {
            errors.push("polling.interval_ms must be greater than zero".to_string());
        }
        if config.polling.timeout_ms == 0 {
            errors.push("polling.timeout_ms must be greater than zero".to_string());
        }
        if config.health.interval_ms == 0 {
            errors.push("health.interval_ms must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
