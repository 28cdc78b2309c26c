use std::io::Write;
use std::time::Instant;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::constants::{duration_millis, SPINNER_FRAME_MS};

/// Single-line stderr spinner with an updatable status suffix.
pub struct AnimatedLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    status_sender: watch::Sender<String>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let (status_sender, _) = watch::channel(String::new());

        Self {
            message,
            animation_chars,
            status_sender,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let status_rx = self.status_sender.subscribe();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(duration_millis(SPINNER_FRAME_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let status = status_rx.borrow().clone();
                        eprint!(
                            "\r\x1b[K{} {} {} ({}s)",
                            message,
                            animation_chars[frame],
                            status,
                            started.elapsed().as_secs()
                        );
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    /// Replaces the status suffix shown after the spinner.
    pub fn update(&self, status: impl Into<String>) {
        self.status_sender.send_replace(status.into());
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for AnimatedLogger {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
