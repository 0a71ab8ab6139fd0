// Launch Worker Shutdown Token

use crate::domain::CancelToken;
use tokio::sync::watch;
use tracing::info;

/// Shutdown signal for graceful termination.
///
/// Dropping the sender counts as a shutdown request.
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }

    /// Wait for shutdown, then cancel `cancel` so a thread blocked in
    /// `dequeue_or_wait` returns promptly
    pub async fn cancel_on_shutdown(&mut self, cancel: &CancelToken) {
        self.wait().await;
        cancel.cancel();
    }
}

/// Shutdown sender
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Signal shutdown to all workers
    pub fn shutdown(&self) {
        info!(workers = self.tx.receiver_count(), "Shutdown requested");
        let _ = self.tx.send(true);
    }
}

/// Create a shutdown channel
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}
