use std::sync::Arc;

use crate::errors::ReviewResult;
use crate::services::health_monitor::HealthGate;
use crate::services::job_poller::JobPoller;
use crate::services::job_submitter::JobSubmitter;
use crate::services::retry_middleware::RetryMiddleware;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::job::Job;
use crate::structs::poll_options::PollOptions;
use crate::structs::retry_policy::RetryPolicy;
use crate::traits::transport::Transport;

/// The submission path: health gate, then submit, then poll.
///
/// Cloning is cheap and clones share nothing mutable, so independent analyses
/// can run concurrently from clones of one client.
#[derive(Clone)]
pub struct ReviewClient {
    submitter: JobSubmitter,
    poller: JobPoller,
    health: HealthGate,
    poll_options: PollOptions,
}

impl ReviewClient {
    pub fn new(transport: Arc<dyn Transport>, retry: RetryPolicy, poll_options: PollOptions, health: HealthGate) -> Self {
        let middleware = RetryMiddleware::new(transport, retry);
        Self {
            submitter: JobSubmitter::new(middleware.clone()),
            poller: JobPoller::new(middleware),
            health,
            poll_options,
        }
    }

    pub fn with_poll_options(mut self, poll_options: PollOptions) -> Self {
        self.poll_options = poll_options;
        self
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> ReviewResult<serde_json::Value> {
        self.analyze_with(request, |_| {}).await
    }

    /// Runs one analysis, reporting each polled job view to `observe`.
    pub async fn analyze_with<F>(&self, request: &AnalysisRequest, observe: F) -> ReviewResult<serde_json::Value>
    where
        F: FnMut(&Job),
    {
        self.health.ensure_online().await?;

        let job_id = self.submitter.submit(request).await?;
        self.poller.poll_with(&job_id, self.poll_options, observe).await
    }
}
