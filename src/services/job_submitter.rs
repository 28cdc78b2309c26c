use crate::config::constants::ANALYZE_PATH;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::retry_middleware::RetryMiddleware;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::job::JobId;
use crate::structs::submit_response::SubmitResponse;
use crate::structs::transport_request::TransportRequest;

/// Starts analysis jobs on the review server.
#[derive(Clone)]
pub struct JobSubmitter {
    middleware: RetryMiddleware,
}

impl JobSubmitter {
    pub fn new(middleware: RetryMiddleware) -> Self {
        Self { middleware }
    }

    pub async fn submit(&self, request: &AnalysisRequest) -> ReviewResult<JobId> {
        log::info!("📤 Submitting {} #{} ({})", request.repo(), request.pr_number(), request.provider());

        let body = serde_json::to_value(request)?;
        let response = self.middleware.execute(&TransportRequest::post(ANALYZE_PATH, body)).await?;

        let parsed: SubmitResponse = response
            .json()
            .map_err(|e| ReviewError::protocol_error(ANALYZE_PATH, &format!("undecodable body: {}", e)))?;

        let job_id = parsed
            .job_id
            .and_then(JobId::new)
            .ok_or_else(|| ReviewError::protocol_error(ANALYZE_PATH, "No job_id returned from backend"))?;

        log::info!("🆔 Job {} accepted", job_id);
        Ok(job_id)
    }
}
