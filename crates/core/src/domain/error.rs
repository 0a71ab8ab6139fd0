// Queue Error Types

use thiserror::Error;

/// Conditions reported by queue operations.
///
/// Every failing operation leaves the queue exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is empty")]
    Empty,

    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Element already queued: {0}")]
    Duplicate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Timed out waiting for an element")]
    Timeout,

    #[error("Wait cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, QueueError>;
