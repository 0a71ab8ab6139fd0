// Ring-buffer OrderedStore

use launchq_core::domain::Identity;
use launchq_core::port::OrderedStore;
use std::collections::VecDeque;
use std::ops::Range;

/// Ring buffer store with O(1) push and pop at both ends
#[derive(Debug, Clone, Default)]
pub struct RingStore<T> {
    items: VecDeque<T>,
}

impl<T> RingStore<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T: Identity> OrderedStore<T> for RingStore<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push_back(&mut self, id: T) {
        self.items.push_back(id);
    }

    fn push_front(&mut self, id: T) {
        self.items.push_front(id);
    }

    fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn position(&self, id: &T) -> Option<usize> {
        self.items.iter().position(|item| item == id)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    fn slice(&self, range: Range<usize>) -> Vec<T> {
        self.items.range(range).cloned().collect()
    }
}
