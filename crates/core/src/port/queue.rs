// Launch Queue Ports - capability sets offered to callers
//
// Callers depend on the narrowest capability they need. None of these
// traits mention the backing store, so stores can change without touching
// callers.

use crate::domain::error::Result;
use crate::domain::{Deadline, QueueElement, SwapOutcome};

/// Submit identities
pub trait QueueProducer<T>: Send + Sync {
    /// Append `id` at the tail. Fails with `Duplicate` if already queued.
    fn enqueue(&self, id: T) -> Result<T>;
}

/// Take identities from the head
pub trait QueueConsumer<T>: Send + Sync {
    /// Remove the head without blocking. Fails with `Empty`.
    fn dequeue(&self) -> Result<T>;

    /// Remove the head, waiting for one to arrive if needed.
    /// Fails with `Timeout` or `Cancelled` without mutating the queue.
    fn dequeue_or_wait(&self, deadline: Deadline) -> Result<T>;
}

/// Reprioritize queued identities
pub trait QueueReorder<T>: Send + Sync {
    fn remove(&self, id: &T) -> Result<T>;

    fn move_to_front(&self, id: &T) -> Result<QueueElement<T>>;

    fn move_to_back(&self, id: &T) -> Result<QueueElement<T>>;

    fn swap(&self, a: &T, b: &T) -> Result<SwapOutcome<T>>;
}

/// Consistent read-only views
pub trait QueueReader<T>: Send + Sync {
    /// Snapshot window; `None` bounds mean "from the head" / "to the end"
    fn get(&self, offset: Option<i64>, limit: Option<i64>) -> Result<Vec<QueueElement<T>>>;

    fn count(&self) -> usize;
}

/// Full queue capability set
pub trait LaunchQueue<T>: QueueProducer<T> + QueueConsumer<T> + QueueReorder<T> + QueueReader<T> {}

impl<T, Q> LaunchQueue<T> for Q where
    Q: QueueProducer<T> + QueueConsumer<T> + QueueReorder<T> + QueueReader<T>
{
}
