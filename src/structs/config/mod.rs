pub mod config;
pub mod health_config;
pub mod polling_config;
pub mod retry_config;
pub mod server_config;
