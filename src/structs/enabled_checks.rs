use serde::{Deserialize, Serialize};

use crate::errors::{ReviewError, ReviewResult};
use crate::helpers::config_helper::ConfigHelper;

/// Named check toggles sent to the server as `enabled_checks`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct EnabledChecks {
    #[serde(default = "ConfigHelper::default_check_enabled")]
    pub style: bool,

    #[serde(default = "ConfigHelper::default_check_enabled")]
    pub complexity: bool,

    #[serde(default = "ConfigHelper::default_check_enabled")]
    pub security: bool,

    #[serde(default = "ConfigHelper::default_check_enabled")]
    pub performance: bool,

    #[serde(default = "ConfigHelper::default_check_enabled")]
    pub ai_feedback: bool,
}

impl Default for EnabledChecks {
    fn default() -> Self {
        Self {
            style: true,
            complexity: true,
            security: true,
            performance: true,
            ai_feedback: true,
        }
    }
}

impl EnabledChecks {
    pub const NAMES: [&'static str; 5] = ["style", "complexity", "security", "performance", "ai_feedback"];

    pub fn none() -> Self {
        Self {
            style: false,
            complexity: false,
            security: false,
            performance: false,
            ai_feedback: false,
        }
    }

    /// Enable exactly the checks in a comma separated list.
    pub fn only(list: &str) -> ReviewResult<Self> {
        let mut checks = Self::none();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            checks.set(name, true)?;
        }
        Ok(checks)
    }

    pub fn set(&mut self, name: &str, enabled: bool) -> ReviewResult<()> {
        let slot = match name.to_lowercase().replace('-', "_").as_str() {
            "style" => &mut self.style,
            "complexity" => &mut self.complexity,
            "security" => &mut self.security,
            "performance" => &mut self.performance,
            "ai_feedback" | "ai" => &mut self.ai_feedback,
            _ => {
                return Err(ReviewError::config_error(
                    &format!("unknown check '{}', expected one of: {}", name, Self::NAMES.join(", ")),
                    Some("checks"),
                ))
            }
        };
        *slot = enabled;
        Ok(())
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        let flags = [self.style, self.complexity, self.security, self.performance, self.ai_feedback];
        Self::NAMES
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect()
    }
}
