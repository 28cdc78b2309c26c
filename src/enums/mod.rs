pub mod commands;
pub mod git_provider;
pub mod health_status;
pub mod http_method;
pub mod job_status;
pub mod transport_error;
