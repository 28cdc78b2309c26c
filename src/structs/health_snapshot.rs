use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::enums::health_status::HealthStatus;

/// Last published health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct HealthSnapshot {
    pub status: HealthStatus,
    pub checked_at: Option<DateTime<Utc>>,
}

impl HealthSnapshot {
    pub fn observed(status: HealthStatus) -> Self {
        Self {
            status,
            checked_at: Some(Utc::now()),
        }
    }
}
