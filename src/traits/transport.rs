use async_trait::async_trait;
use crate::enums::transport_error::TransportError;
use crate::structs::transport_request::TransportRequest;
use crate::structs::transport_response::TransportResponse;

/// A single HTTP exchange. Any response, whatever its status, is `Ok`;
/// `Err` means no response was received.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {

    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError>;
}
