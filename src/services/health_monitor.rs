use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::constants::{HEALTH_OK, HEALTH_PATH, MIN_PROBE_INTERVAL};
use crate::enums::health_status::HealthStatus;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::health_response::HealthResponse;
use crate::structs::health_snapshot::HealthSnapshot;
use crate::structs::transport_request::TransportRequest;
use crate::traits::transport::Transport;

/// Periodic liveness prober. One instance per session; probing stops when
/// [`stop`](Self::stop) is awaited or the monitor is dropped.
pub struct HealthMonitor {
    gate: HealthGate,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl HealthMonitor {
    /// Single probe without retries. Every failure maps to `Offline`.
    pub async fn check_health(transport: &dyn Transport) -> HealthStatus {
        match transport.send(&TransportRequest::get(HEALTH_PATH)).await {
            Ok(response) if response.is_success() => match response.json::<HealthResponse>() {
                Ok(HealthResponse { status: Some(status) }) if status == HEALTH_OK => HealthStatus::Online,
                Ok(body) => {
                    log::debug!("Health endpoint reported {:?}", body.status);
                    HealthStatus::Offline
                }
                Err(e) => {
                    log::debug!("Health endpoint returned an undecodable body: {}", e);
                    HealthStatus::Offline
                }
            },
            Ok(response) => {
                log::debug!("Health endpoint answered {}", response.status);
                HealthStatus::Offline
            }
            Err(e) => {
                log::debug!("Health check failed: {}", e);
                HealthStatus::Offline
            }
        }
    }

    /// Spawns the probe loop. The first probe fires immediately; intervals
    /// below one millisecond are raised to one.
    pub fn start(transport: Arc<dyn Transport>, interval: Duration) -> Self {
        let interval = interval.max(MIN_PROBE_INTERVAL);
        let (status_tx, status_rx) = watch::channel(HealthSnapshot::default());
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {}
                }

                let status = tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    status = Self::check_health(transport.as_ref()) => status,
                };

                let previous = status_tx.send_replace(HealthSnapshot::observed(status)).status;
                if previous != status {
                    log::info!("{} Server: {} -> {}", status.emoji(), previous, status);
                }
            }

            log::debug!("Health monitor stopped");
        });

        Self {
            gate: HealthGate { receiver: status_rx },
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub fn gate(&self) -> HealthGate {
        self.gate.clone()
    }

    pub fn current(&self) -> HealthSnapshot {
        self.gate.current()
    }

    /// Stops probing and waits for the task to finish.
    pub async fn stop(mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

/// Read side of the health monitor, consulted before every submission.
#[derive(Clone, Debug)]
pub struct HealthGate {
    receiver: watch::Receiver<HealthSnapshot>,
}

impl HealthGate {
    /// A gate pinned to one status, for callers that track health themselves.
    pub fn fixed(status: HealthStatus) -> Self {
        let (_sender, receiver) = watch::channel(HealthSnapshot::observed(status));
        Self { receiver }
    }

    pub fn current(&self) -> HealthSnapshot {
        *self.receiver.borrow()
    }

    /// Current status, waiting out `Checking` until the first verdict. A monitor
    /// that goes away without a verdict counts as `Offline`.
    pub async fn settled(&self) -> HealthStatus {
        let mut receiver = self.receiver.clone();
        let status = match receiver.wait_for(|s| s.status != HealthStatus::Checking).await {
            Ok(snapshot) => snapshot.status,
            Err(_) => HealthStatus::Offline,
        };
        status
    }

    /// Waits for the next published snapshot. `None` once the monitor is gone.
    pub async fn next(&mut self) -> Option<HealthSnapshot> {
        self.receiver.changed().await.ok()?;
        let snapshot = *self.receiver.borrow_and_update();
        Some(snapshot)
    }

    pub async fn ensure_online(&self) -> ReviewResult<()> {
        match self.settled().await {
            HealthStatus::Online => Ok(()),
            health => Err(ReviewError::Precondition { health }),
        }
    }
}
