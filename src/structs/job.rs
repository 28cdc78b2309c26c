use std::fmt;
use serde::{Deserialize, Serialize};

use crate::enums::job_status::JobStatus;

/// Opaque server-assigned job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Returns `None` for a blank identifier or a bare dot segment.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() || raw == "." || raw == ".." {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of `GET /analyze/{job_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusResponse {
    pub status: JobStatus,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Read-only client view of a server-side job.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Job {
    pub job_id: JobId,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Job {
    pub fn from_response(job_id: JobId, response: JobStatusResponse) -> Self {
        Self {
            job_id,
            status: response.status,
            result: response.result.filter(|r| !r.is_null()),
            error: response.error.and_then(Self::render_error),
        }
    }

    /// Strings pass through; structured errors are kept as compact JSON.
    fn render_error(error: serde_json::Value) -> Option<String> {
        match error {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}
