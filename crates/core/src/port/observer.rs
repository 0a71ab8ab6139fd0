// Queue Observer Port

use crate::domain::{AppliedOp, Identity};
use tracing::debug;

/// Receives every mutating operation applied to a queue.
///
/// Called with the queue lock held, so calls arrive in linearization order.
/// Implementations must return quickly and must not call back into the
/// queue they observe.
pub trait QueueObserver<T>: Send + Sync {
    fn on_applied(&self, applied: &AppliedOp<T>);
}

/// Emits each applied operation as a debug event
pub struct TracingObserver;

impl<T: Identity> QueueObserver<T> for TracingObserver {
    fn on_applied(&self, applied: &AppliedOp<T>) {
        match &applied.outcome {
            Ok(id) => debug!(op = applied.op.name(), id = %id, "Queue operation applied"),
            Err(e) => debug!(op = applied.op.name(), error = %e, "Queue operation rejected"),
        }
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use parking_lot::Mutex;

    /// Records applied operations in the order the queue reports them
    #[derive(Default)]
    pub struct RecordingObserver<T> {
        log: Mutex<Vec<AppliedOp<T>>>,
    }

    impl<T: Clone> RecordingObserver<T> {
        pub fn new() -> Self {
            Self {
                log: Mutex::new(Vec::new()),
            }
        }

        pub fn recorded(&self) -> Vec<AppliedOp<T>> {
            self.log.lock().clone()
        }
    }

    impl<T: Clone + Send> QueueObserver<T> for RecordingObserver<T> {
        fn on_applied(&self, applied: &AppliedOp<T>) {
            self.log.lock().push(applied.clone());
        }
    }
}
