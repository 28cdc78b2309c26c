pub mod config_helper;
#[cfg(test)]
pub mod scripted_transport;
