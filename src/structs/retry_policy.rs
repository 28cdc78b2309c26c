use std::time::Duration;

use crate::config::constants::{duration_millis, DEFAULT_RETRY_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS};
use crate::structs::config::retry_config::RetryConfig;

/// Attempt ceiling and fixed inter-attempt delay for one logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Never less than one.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// A single attempt and no delay.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_MAX_ATTEMPTS, duration_millis(DEFAULT_RETRY_DELAY_MS))
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, duration_millis(config.delay_ms))
    }
}
