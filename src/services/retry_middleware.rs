use std::sync::Arc;

use crate::errors::{ReviewError, ReviewResult};
use crate::structs::attempt_state::AttemptState;
use crate::structs::retry_policy::RetryPolicy;
use crate::structs::transport_request::TransportRequest;
use crate::structs::transport_response::TransportResponse;
use crate::traits::transport::Transport;

/// Re-issues a request on transient failures (no response, or 5xx) with a
/// fixed delay, up to the policy's attempt ceiling. 4xx responses are final.
#[derive(Clone)]
pub struct RetryMiddleware {
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl RetryMiddleware {
    pub fn new(transport: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub async fn execute(&self, request: &TransportRequest) -> ReviewResult<TransportResponse> {
        self.execute_with(request, self.policy).await
    }

    /// Like [`execute`](Self::execute) with a per-call policy override.
    pub async fn execute_with(&self, request: &TransportRequest, policy: RetryPolicy) -> ReviewResult<TransportResponse> {
        let mut state = AttemptState::new(policy);

        loop {
            let attempt = state.begin_attempt();

            let failure = match self.transport.send(request).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) if response.is_client_error() => {
                    log::debug!("{} {} rejected with {}", request.method, request.path, response.status);
                    return Err(ReviewError::Client {
                        status: response.status,
                        message: response.error_message(),
                    });
                }
                Ok(response) if response.is_server_error() => ReviewError::Server {
                    status: response.status,
                    message: response.error_message(),
                    attempts: attempt,
                },
                Ok(response) => {
                    return Err(ReviewError::protocol_error(
                        &request.path,
                        &format!("unexpected HTTP status {}", response.status),
                    ));
                }
                Err(source) => ReviewError::Transport { source, attempts: attempt },
            };

            if !state.can_retry() {
                log::error!("❌ {} {} failed after {} attempts: {}", request.method, request.path, attempt, failure);
                return Err(failure);
            }

            log::warn!(
                "🔄 Retrying {} {} ({}/{}) after {}ms: {}",
                request.method,
                request.path,
                state.retries_performed() + 1,
                state.max_attempts() - 1,
                state.delay().as_millis(),
                failure
            );
            tokio::time::sleep(state.delay()).await;
        }
    }
}
