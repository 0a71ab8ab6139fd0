//! Launch Queue Daemon - Main Entry Point
//! Wires the reorderable queue to a store and a launch worker
//!
//! The admin surface (`QueueService`: paging, move, swap, remove) is a
//! library API in `launchq-core`. This binary has no transport yet, so it
//! does not construct one; callers embed the core crate to reach it.

mod config;
mod launcher;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{DaemonConfig, LogFormat, StoreKind};
use launcher::LogLauncher;
use launchq_core::application::{shutdown_channel, LaunchWorker, ReorderableQueue};
use launchq_core::domain::GroupId;
use launchq_core::port::{OrderedStore, TracingObserver};
use launchq_infra_memory::{RingStore, VecStore};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_FILE_NAME: &str = "launchq.log";
const WORKER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (before logging so the format can be configured)
    let config = DaemonConfig::load()?;

    // 2. Initialize logging; keep the guard alive to flush the file writer
    let _log_guard = init_logging(&config)?;

    info!("Launch queue v{} starting...", VERSION);

    // 3. Pick the backing store
    match config.store {
        StoreKind::Vec => serve(VecStore::new(), &config).await,
        StoreKind::Ring => serve(RingStore::new(), &config).await,
    }
}

fn init_logging(config: &DaemonConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("launchq=info"))?;

    let (file_layer, guard) = match config.log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(guard)
}

async fn serve<S: OrderedStore<GroupId>>(store: S, config: &DaemonConfig) -> Result<()> {
    // 4. Build the queue and enqueue the configured seed
    let queue: ReorderableQueue<GroupId, S> =
        ReorderableQueue::with_observer(store, Arc::new(TracingObserver));
    for id in &config.seed {
        if let Err(e) = queue.enqueue(GroupId::new(id.as_str())) {
            warn!(group_id = %id, error = %e, "Skipping seed entry");
        }
    }
    info!(store = ?config.store, queued = queue.count(), "Launch queue ready");

    // 5. Start the launch worker
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let worker = LaunchWorker::new(Arc::new(queue.clone()), Arc::new(LogLauncher))
        .with_poll_interval(config.poll_interval());

    let worker_handle = tokio::spawn(async move {
        if let Err(e) = worker.run(shutdown_rx).await {
            error!(error = ?e, "Launch worker failed");
        }
    });

    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    shutdown_tx.shutdown();
    if tokio::time::timeout(WORKER_SHUTDOWN_TIMEOUT, worker_handle)
        .await
        .is_err()
    {
        warn!("Launch worker did not stop in time");
    }

    info!(remaining = queue.count(), "Shutdown complete.");

    Ok(())
}
