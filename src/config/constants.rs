use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "PR_REVIEW_API_URL";

pub const CONFIG_DIR_NAME: &str = "pr-review";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_HEALTH_INTERVAL_MS: u64 = 30_000;

pub const ANALYZE_PATH: &str = "/analyze";
pub const HEALTH_PATH: &str = "/health";
pub const HEALTH_OK: &str = "ok";

pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";
pub const GENERIC_JOB_FAILURE: &str = "Analysis failed";

pub const MIN_PROBE_INTERVAL: Duration = Duration::from_millis(1);

pub const SPINNER_FRAME_MS: u64 = 150;

/// Status path for a job, with the id encoded as a single path segment.
pub fn job_status_path(job_id: &str) -> String {
    format!("{}/{}", ANALYZE_PATH, urlencoding::encode(job_id))
}

pub fn duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
