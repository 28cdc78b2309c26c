use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Per-call transport timeout, independent of the poll timeout.
    #[serde(default = "ConfigHelper::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            request_timeout_ms: ConfigHelper::default_request_timeout_ms(),
        }
    }
}
