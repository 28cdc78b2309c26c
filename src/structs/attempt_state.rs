use std::time::Duration;

use crate::structs::retry_policy::RetryPolicy;

/// Per-call retry bookkeeping. Created fresh for every logical request.
#[derive(Debug)]
pub struct AttemptState {
    attempts: u32,
    max_attempts: u32,
    delay: Duration,
}

impl AttemptState {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            attempts: 0,
            max_attempts: policy.max_attempts.max(1),
            delay: policy.delay,
        }
    }

    /// Records the start of an attempt and returns its 1-based number.
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retries_performed(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }

    pub fn can_retry(&self) -> bool {
        self.attempts < self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_counts_the_first_attempt() {
        let mut state = AttemptState::new(RetryPolicy::new(3, Duration::from_millis(10)));
        assert_eq!(state.begin_attempt(), 1);
        assert!(state.can_retry());
        state.begin_attempt();
        state.begin_attempt();
        assert!(!state.can_retry());
        assert_eq!(state.retries_performed(), 2);
    }

    #[test]
    fn zero_ceiling_still_allows_one_attempt() {
        let mut state = AttemptState::new(RetryPolicy { max_attempts: 0, delay: Duration::ZERO });
        assert_eq!(state.max_attempts(), 1);
        state.begin_attempt();
        assert!(!state.can_retry());
    }
}
