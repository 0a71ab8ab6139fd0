// Application Layer - Queue, use cases and worker loop

pub mod launcher;
pub mod queue;
pub mod queue_service;

// Re-exports
pub use launcher::{shutdown_channel, LaunchWorker, ShutdownSender, ShutdownToken};
pub use queue::ReorderableQueue;
pub use queue_service::QueueService;
