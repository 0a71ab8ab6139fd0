// Port Layer - Interfaces for callers and adapters

pub mod authorizer;
pub mod launcher;
pub mod observer;
pub mod queue;
pub mod store;

// Re-exports
pub use authorizer::Authorizer;
pub use launcher::{LaunchError, Launcher};
pub use observer::{QueueObserver, TracingObserver};
pub use queue::{LaunchQueue, QueueConsumer, QueueProducer, QueueReader, QueueReorder};
pub use store::OrderedStore;
