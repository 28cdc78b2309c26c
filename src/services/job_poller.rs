use tokio::time::Instant;

use crate::config::constants::{job_status_path, GENERIC_JOB_FAILURE};
use crate::enums::job_status::JobStatus;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::retry_middleware::RetryMiddleware;
use crate::structs::job::{Job, JobId, JobStatusResponse};
use crate::structs::poll_options::PollOptions;
use crate::structs::transport_request::TransportRequest;

/// Drives the status loop for one job until it completes, fails or runs out of time.
#[derive(Clone)]
pub struct JobPoller {
    middleware: RetryMiddleware,
}

impl JobPoller {
    pub fn new(middleware: RetryMiddleware) -> Self {
        Self { middleware }
    }

    /// One status query, with the middleware's retries.
    pub async fn fetch(&self, job_id: &JobId) -> ReviewResult<Job> {
        let path = job_status_path(job_id.as_str());
        let response = self.middleware.execute(&TransportRequest::get(path.as_str())).await?;

        let parsed: JobStatusResponse = response
            .json()
            .map_err(|e| ReviewError::protocol_error(&path, &format!("undecodable job status: {}", e)))?;

        Ok(Job::from_response(job_id.clone(), parsed))
    }

    pub async fn poll(&self, job_id: &JobId, options: PollOptions) -> ReviewResult<serde_json::Value> {
        self.poll_with(job_id, options, |_| {}).await
    }

    /// Polls until a terminal status, calling `observe` with every job view.
    ///
    /// The deadline is checked after each response; the wait before the next
    /// query never extends past it.
    pub async fn poll_with<F>(&self, job_id: &JobId, options: PollOptions, mut observe: F) -> ReviewResult<serde_json::Value>
    where
        F: FnMut(&Job),
    {
        let started = Instant::now();
        let mut queries: u32 = 0;

        loop {
            let job = self.fetch(job_id).await?;
            queries += 1;
            observe(&job);

            match job.status {
                JobStatus::Completed => {
                    log::info!("✅ Job {} completed after {} status queries", job_id, queries);
                    return job.result.ok_or_else(|| {
                        ReviewError::protocol_error(&job_status_path(job_id.as_str()), "completed job carries no result")
                    });
                }
                JobStatus::Failed => {
                    let reason = job
                        .error
                        .filter(|e| !e.trim().is_empty())
                        .unwrap_or_else(|| GENERIC_JOB_FAILURE.to_string());
                    log::warn!("❌ Job {} failed: {}", job_id, reason);
                    return Err(ReviewError::JobFailed {
                        job_id: job_id.to_string(),
                        reason,
                    });
                }
                JobStatus::Unknown => {
                    log::warn!("Job {} reported an unrecognised status; still waiting", job_id);
                }
                JobStatus::Pending | JobStatus::Running => {
                    log::debug!("Job {} is {} (query {})", job_id, job.status, queries);
                }
            }

            let elapsed = started.elapsed();
            if elapsed >= options.timeout {
                log::warn!("⏱️  Job {} still {} after {}ms", job_id, job.status, elapsed.as_millis());
                return Err(ReviewError::Timeout {
                    job_id: job_id.to_string(),
                    elapsed,
                    last_status: job.status,
                });
            }

            tokio::time::sleep(options.interval.min(options.timeout - elapsed)).await;
        }
    }
}
