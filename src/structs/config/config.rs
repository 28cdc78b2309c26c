use serde::{Deserialize, Serialize};
use crate::structs::config::health_config::HealthConfig;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::config::retry_config::RetryConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::enabled_checks::EnabledChecks;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub health: HealthConfig,

    #[serde(default)]
    pub checks: EnabledChecks,
}
