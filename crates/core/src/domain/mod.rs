// Domain Layer - Queue entities and value types

pub mod element;
pub mod error;
pub mod identity;
pub mod wait;
pub mod window;

// Re-exports
pub use element::{AppliedOp, QueueElement, QueueOp, SwapOutcome};
pub use error::QueueError;
pub use identity::{GroupId, Identity};
pub use wait::{CancelToken, Deadline};
pub use window::Window;
