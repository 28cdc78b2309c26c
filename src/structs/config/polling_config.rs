use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "ConfigHelper::default_poll_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: ConfigHelper::default_poll_interval_ms(),
            timeout_ms: ConfigHelper::default_poll_timeout_ms(),
        }
    }
}
