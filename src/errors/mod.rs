use std::time::Duration;
use thiserror::Error;

use crate::enums::health_status::HealthStatus;
use crate::enums::job_status::JobStatus;
use crate::enums::transport_error::TransportError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    // Retry-eligible failures, surfaced once the attempt ceiling is spent
    #[error("Network error: Unable to connect to the server ({source})")]
    Transport {
        source: TransportError,
        attempts: u32,
    },
    #[error("{status}: {message}")]
    Server {
        status: u16,
        message: String,
        attempts: u32,
    },

    // Never retried
    #[error("{status}: {message}")]
    Client {
        status: u16,
        message: String,
    },
    #[error("Malformed response from {endpoint}: {reason}")]
    Protocol {
        endpoint: String,
        reason: String,
    },

    // Terminal job outcomes
    #[error("{reason}")]
    JobFailed {
        job_id: String,
        reason: String,
    },
    #[error("Analysis timed out after {}ms (job {job_id}, last status: {last_status})", .elapsed.as_millis())]
    Timeout {
        job_id: String,
        elapsed: Duration,
        last_status: JobStatus,
    },

    #[error("Server is offline. Please try again later. (health: {health})")]
    Precondition {
        health: HealthStatus,
    },

    // Local errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },
    #[error("Invalid pull request URL '{url}': {reason}")]
    InvalidPrUrl {
        url: String,
        reason: String,
    },
    #[error("Invalid {argument}: {reason}")]
    InvalidInput {
        argument: String,
        reason: String,
    },
    #[error("I/O error during {operation}: {reason}")]
    Io {
        operation: String,
        reason: String,
    },
}

impl ReviewError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn protocol_error(endpoint: &str, reason: &str) -> Self {
        Self::Protocol {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_pr_url(url: &str, reason: &str) -> Self {
        Self::InvalidPrUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_input(argument: &str, reason: &str) -> Self {
        Self::InvalidInput {
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io_error(operation: &str, reason: &str) -> Self {
        Self::Io {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status carried by the error, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Client { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller may reasonably try the whole operation again later.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Server { .. } => true,
            Self::Timeout { .. } => true,
            Self::Precondition { .. } => true,
            Self::Client { .. } => false,
            Self::Protocol { .. } => false,
            Self::JobFailed { .. } => false,
            Self::Configuration { .. } => false,
            Self::InvalidPrUrl { .. } => false,
            Self::InvalidInput { .. } => false,
            Self::Io { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::Critical,
            Self::Protocol { .. } => ErrorSeverity::High,
            Self::Configuration { .. } => ErrorSeverity::High,
            Self::Server { .. } => ErrorSeverity::High,
            Self::Transport { .. } => ErrorSeverity::Medium,
            Self::JobFailed { .. } => ErrorSeverity::Medium,
            Self::Timeout { .. } => ErrorSeverity::Medium,
            Self::Precondition { .. } => ErrorSeverity::Medium,
            Self::Client { .. } => ErrorSeverity::Low,
            Self::InvalidPrUrl { .. } => ErrorSeverity::Low,
            Self::InvalidInput { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        let hint = match self {
            Self::Transport { attempts, .. } => {
                format!("Gave up after {} attempts. Check that the review server is reachable", attempts)
            }
            Self::Server { attempts, .. } => {
                format!("The server kept failing after {} attempts. Try again later", attempts)
            }
            Self::Client { status: 404, .. } => "The server does not know this job or endpoint".to_string(),
            Self::Client { .. } => "The server rejected the request".to_string(),
            Self::Protocol { .. } => "Client and server versions may not match".to_string(),
            Self::JobFailed { job_id, .. } => format!("Job {} failed on the server", job_id),
            Self::Timeout { .. } => {
                "The job may still be running. Raise --timeout-ms or check it later with 'pr-review status'".to_string()
            }
            Self::Precondition { .. } => "Run 'pr-review health' to check the server".to_string(),
            Self::Configuration { field: Some(field), .. } => format!("Check the '{}' setting", field),
            Self::Configuration { .. } => "Run 'pr-review validate' to inspect the configuration".to_string(),
            Self::InvalidPrUrl { .. } => {
                "Use a github.com, gitlab.com or bitbucket.org pull request URL".to_string()
            }
            Self::InvalidInput { .. } => "Run the command with --help to see the expected arguments".to_string(),
            Self::Io { .. } => "Check file permissions and paths".to_string(),
        };

        format!("{}\n💡 {}", self, hint)
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for review client operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Error handler for consistent error reporting at the CLI boundary
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReviewError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }

    /// Summarise the failures of a batch of analyses, worst first.
    pub fn handle_multiple_errors(errors: &[(String, ReviewError)]) {
        if errors.is_empty() {
            return;
        }

        let mut sorted: Vec<&(String, ReviewError)> = errors.iter().collect();
        sorted.sort_by(|a, b| b.1.severity().cmp(&a.1.severity()));

        eprintln!("❌ {} analyses failed:", errors.len());
        for (i, (target, error)) in sorted.iter().enumerate() {
            log::debug!("{} -> {}", target, error.technical_details());
            eprintln!(
                "  {}. {} {}\n     {}",
                i + 1,
                error.severity().emoji(),
                target,
                error.user_message().replace('\n', "\n     ")
            );
        }
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        ReviewError::Io {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(error: toml::de::Error) -> Self {
        ReviewError::Configuration {
            message: format!("invalid TOML: {}", error.message()),
            field: None,
        }
    }
}

impl From<toml::ser::Error> for ReviewError {
    fn from(error: toml::ser::Error) -> Self {
        ReviewError::Configuration {
            message: format!("could not serialize configuration: {}", error),
            field: None,
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        ReviewError::Io {
            operation: "JSON encoding".to_string(),
            reason: error.to_string(),
        }
    }
}
