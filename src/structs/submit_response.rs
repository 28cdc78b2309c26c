use serde::Deserialize;

/// Body of `POST /analyze`. Only the job id is read; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub job_id: Option<String>,
}
