// Launch Worker - drains the launch queue into the Launcher port

pub mod constants;
mod shutdown;

use constants::*;
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};

use crate::domain::{CancelToken, Deadline, GroupId, QueueError};
use crate::error::{AppError, Result};
use crate::port::{Launcher, QueueConsumer};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Pulls group IDs off the queue in order and launches each one
pub struct LaunchWorker {
    queue: Arc<dyn QueueConsumer<GroupId>>,
    launcher: Arc<dyn Launcher>,
    poll_interval: Duration,
}

impl LaunchWorker {
    pub fn new(queue: Arc<dyn QueueConsumer<GroupId>>, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            queue,
            launcher,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Run worker loop with graceful shutdown support
    pub async fn run(&self, mut shutdown: ShutdownToken) -> Result<()> {
        info!(poll_interval_ms = self.poll_interval.as_millis() as u64, "Launch worker started");
        loop {
            if shutdown.is_shutdown() {
                info!("Launch worker shutting down");
                break;
            }
            match self.next_group(&mut shutdown).await {
                Ok(Some(group_id)) => {
                    self.launch(group_id).await;
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Launch worker error: {}", e);
                    tokio::select! {
                        _ = sleep(ERROR_RECOVERY_SLEEP_DURATION) => {},
                        _ = shutdown.wait() => {
                            info!("Launch worker interrupted during error recovery");
                            break;
                        }
                    }
                }
            }
        }
        info!("Launch worker stopped");
        Ok(())
    }

    /// Launch the current head without waiting (returns true if one was launched)
    pub async fn process_next(&self) -> Result<bool> {
        match self.queue.dequeue() {
            Ok(group_id) => {
                self.launch(group_id).await;
                Ok(true)
            }
            Err(QueueError::Empty) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Block (off the async runtime) until the next group ID, a poll
    /// timeout, or shutdown. An element claimed while shutting down is
    /// still returned so it is not lost.
    async fn next_group(&self, shutdown: &mut ShutdownToken) -> Result<Option<GroupId>> {
        let cancel = CancelToken::new();
        let deadline = Deadline::after(self.poll_interval).with_cancel(cancel.clone());
        let queue = Arc::clone(&self.queue);
        let mut handle = tokio::task::spawn_blocking(move || queue.dequeue_or_wait(deadline));

        let joined = tokio::select! {
            joined = &mut handle => joined,
            _ = shutdown.cancel_on_shutdown(&cancel) => handle.await,
        };

        match joined {
            Ok(Ok(group_id)) => Ok(Some(group_id)),
            Ok(Err(QueueError::Timeout)) | Ok(Err(QueueError::Cancelled)) => Ok(None),
            Ok(Err(e)) => Err(e.into()),
            Err(join_err) => Err(AppError::Internal(format!(
                "Dequeue task failed: {}",
                join_err
            ))),
        }
    }

    /// Hand one group ID to the launcher; failures are logged, not retried
    async fn launch(&self, group_id: GroupId) {
        info!(group_id = %group_id, "Launching queued request");
        if let Err(e) = self.launcher.launch(&group_id).await {
            warn!(group_id = %group_id, error = %e, "Launch failed");
        }
    }
}
