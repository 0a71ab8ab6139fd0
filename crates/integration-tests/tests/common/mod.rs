//! Shared fixtures for launch queue integration tests
#![allow(dead_code)]

use launchq_core::application::ReorderableQueue;
use launchq_core::domain::{QueueError, QueueOp, Window};
use launchq_core::port::OrderedStore;
use std::thread;
use std::time::{Duration, Instant};

/// Build a queue holding `ids` in order
pub fn queue_of<S>(ids: &[&str]) -> ReorderableQueue<String, S>
where
    S: OrderedStore<String> + Default,
{
    let queue = ReorderableQueue::new(S::default());
    for id in ids {
        queue.enqueue(id.to_string()).unwrap();
    }
    queue
}

/// Identities currently queued, head first
pub fn contents<S: OrderedStore<String>>(queue: &ReorderableQueue<String, S>) -> Vec<String> {
    queue.snapshot(Window::all()).into_iter().map(|e| e.id).collect()
}

/// Spin until `n` threads are blocked in `dequeue_or_wait`
pub fn wait_for_waiters<S: OrderedStore<String>>(queue: &ReorderableQueue<String, S>, n: usize) {
    let start = Instant::now();
    while queue.waiting() < n {
        assert!(
            start.elapsed() < Duration::from_secs(5),
            "expected {} waiters, saw {}",
            n,
            queue.waiting()
        );
        thread::sleep(Duration::from_millis(1));
    }
}

/// Single-threaded reference list the queue must agree with
#[derive(Debug, Default, Clone)]
pub struct ReferenceQueue {
    items: Vec<String>,
}

impl ReferenceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn index_of(&self, id: &str) -> Result<usize, QueueError> {
        self.items
            .iter()
            .position(|item| item == id)
            .ok_or_else(|| QueueError::NotFound(id.to_string()))
    }

    /// Apply `op`, returning what the real queue reports for it
    pub fn apply(&mut self, op: &QueueOp<String>) -> Result<String, QueueError> {
        match op {
            QueueOp::Enqueue(id) => {
                if self.items.contains(id) {
                    return Err(QueueError::Duplicate(id.clone()));
                }
                self.items.push(id.clone());
                Ok(id.clone())
            }
            QueueOp::Dequeue => {
                if self.items.is_empty() {
                    Err(QueueError::Empty)
                } else {
                    Ok(self.items.remove(0))
                }
            }
            QueueOp::Remove(id) => {
                let index = self.index_of(id)?;
                Ok(self.items.remove(index))
            }
            QueueOp::MoveToFront(id) => {
                let index = self.index_of(id)?;
                let item = self.items.remove(index);
                self.items.insert(0, item);
                Ok(id.clone())
            }
            QueueOp::MoveToBack(id) => {
                let index = self.index_of(id)?;
                let item = self.items.remove(index);
                self.items.push(item);
                Ok(id.clone())
            }
            QueueOp::Swap(a, b) => {
                let ia = self.index_of(a)?;
                let ib = self.index_of(b)?;
                self.items.swap(ia, ib);
                Ok(a.clone())
            }
        }
    }
}
