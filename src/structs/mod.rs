pub mod analysis_request;
pub mod attempt_state;
pub mod cli;
pub mod config;
pub mod enabled_checks;
pub mod health_response;
pub mod health_snapshot;
pub mod job;
pub mod poll_options;
pub mod pr_reference;
pub mod retry_policy;
pub mod submit_response;
pub mod transport_request;
pub mod transport_response;
