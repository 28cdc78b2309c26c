use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::constants::duration_millis;
use crate::enums::http_method::HttpMethod;
use crate::enums::transport_error::TransportError;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::server_config::ServerConfig;
use crate::structs::transport_request::TransportRequest;
use crate::structs::transport_response::TransportResponse;
use crate::traits::transport::Transport;

/// `reqwest`-backed transport bound to one review server.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ServerConfig) -> ReviewResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ReviewError::config_error(&format!("invalid base URL: {}", e), Some("server.base_url")))?;

        let client = Client::builder()
            .timeout(duration_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.request_timeout_ms.min(10_000)))
            .build()
            .map_err(|e| ReviewError::config_error(&format!("could not build HTTP client: {}", e), None))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {

    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(&request.path);
        log::debug!("Making {} request to {}", request.method, url);

        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder.header("Content-Type", "application/json"),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        // Once a status has arrived the exchange is classified by it, even if the body is lost
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("Body of {} response from {} could not be read: {}", status, url, e);
            String::new()
        });

        log::debug!("Response received from {}: {}", url, status);
        Ok(TransportResponse::new(status, body))
    }
}
