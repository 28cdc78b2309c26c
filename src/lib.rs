//! Async client for the pull-request review service.
//!
//! The submission path lives in [`services::review_client::ReviewClient`]: it
//! consults the [`services::health_monitor::HealthGate`], submits the job and
//! polls it to a terminal state. Every outbound call goes through
//! [`services::retry_middleware::RetryMiddleware`] over a caller-supplied
//! [`traits::transport::Transport`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
