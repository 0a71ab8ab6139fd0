// Queue Element Domain Model

use super::error::QueueError;

/// An identity paired with its zero-based position in the queue.
///
/// The position is the one observed when the element was returned; later
/// mutations are not reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueElement<T> {
    pub id: T,
    pub position: usize,
}

impl<T> QueueElement<T> {
    pub fn new(id: T, position: usize) -> Self {
        Self { id, position }
    }
}

/// Result of a successful swap: both elements at their new positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome<T> {
    pub a: QueueElement<T>,
    pub b: QueueElement<T>,
}

/// A mutating queue operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp<T> {
    Enqueue(T),
    Dequeue,
    Remove(T),
    MoveToFront(T),
    MoveToBack(T),
    Swap(T, T),
}

impl<T> QueueOp<T> {
    pub fn name(&self) -> &'static str {
        match self {
            QueueOp::Enqueue(_) => "enqueue",
            QueueOp::Dequeue => "dequeue",
            QueueOp::Remove(_) => "remove",
            QueueOp::MoveToFront(_) => "move_to_front",
            QueueOp::MoveToBack(_) => "move_to_back",
            QueueOp::Swap(_, _) => "swap",
        }
    }
}

/// An operation as applied to the queue, with its outcome.
///
/// On success the outcome carries the identity the operation returned:
/// the dequeued one for `Dequeue`, the target otherwise (`a` for `Swap`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOp<T> {
    pub op: QueueOp<T>,
    pub outcome: Result<T, QueueError>,
}
