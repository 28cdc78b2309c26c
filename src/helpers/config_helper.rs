use crate::config::constants::{
    DEFAULT_API_URL, DEFAULT_HEALTH_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_TIMEOUT_MS,
    DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_RETRY_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS,
};

/// Serde default providers for the config structs.
pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    pub fn default_request_timeout_ms() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_MS
    }

    pub fn default_max_attempts() -> u32 {
        DEFAULT_RETRY_MAX_ATTEMPTS
    }

    pub fn default_retry_delay_ms() -> u64 {
        DEFAULT_RETRY_DELAY_MS
    }

    pub fn default_poll_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }

    pub fn default_poll_timeout_ms() -> u64 {
        DEFAULT_POLL_TIMEOUT_MS
    }

    pub fn default_health_interval_ms() -> u64 {
        DEFAULT_HEALTH_INTERVAL_MS
    }

    pub fn default_check_enabled() -> bool {
        true
    }
}
