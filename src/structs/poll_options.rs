use std::time::Duration;

use crate::config::constants::{duration_millis, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_TIMEOUT_MS};
use crate::structs::config::polling_config::PollingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    /// Measured from the first status query.
    pub timeout: Duration,
}

impl PollOptions {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self::new(duration_millis(DEFAULT_POLL_INTERVAL_MS), duration_millis(DEFAULT_POLL_TIMEOUT_MS))
    }
}

impl From<&PollingConfig> for PollOptions {
    fn from(config: &PollingConfig) -> Self {
        Self::new(duration_millis(config.interval_ms), duration_millis(config.timeout_ms))
    }
}
