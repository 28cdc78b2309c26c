pub mod health_monitor;
pub mod http_transport;
pub mod job_poller;
pub mod job_submitter;
pub mod retry_middleware;
pub mod review_client;
