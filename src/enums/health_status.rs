use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum HealthStatus {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "offline")]
    Offline,
    /// No probe has completed yet.
    #[serde(rename = "checking")]
    #[default]
    Checking,
}

impl HealthStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, HealthStatus::Online)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            HealthStatus::Online => "🟢",
            HealthStatus::Offline => "🔴",
            HealthStatus::Checking => "🟡",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HealthStatus::Online => "online",
            HealthStatus::Offline => "offline",
            HealthStatus::Checking => "checking",
        };
        write!(f, "{}", name)
    }
}
