use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;

use crate::enums::transport_error::TransportError;
use crate::structs::transport_request::TransportRequest;
use crate::structs::transport_response::TransportResponse;
use crate::traits::transport::Transport;

type Outcome = Result<TransportResponse, TransportError>;

/// Test transport that replays a fixed script of outcomes and records every
/// request it receives. Once the script runs dry the last outcome repeats.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Outcome>>,
    last: Mutex<Option<Outcome>>,
    requests: Mutex<Vec<(TransportRequest, tokio::time::Instant)>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Outcome>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Outcome {
        Ok(TransportResponse::new(status, body.to_string()))
    }

    pub fn unreachable() -> Outcome {
        Err(TransportError::Connect("connection refused".to_string()))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn call_times(&self) -> Vec<tokio::time::Instant> {
        self.requests.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {

    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push((request.clone(), tokio::time::Instant::now()));

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(outcome) => {
                *last = Some(outcome.clone());
                outcome
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(TransportError::Request("script is empty".to_string()))),
        }
    }
}
