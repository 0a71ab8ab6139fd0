// Vec-backed OrderedStore

use launchq_core::domain::Identity;
use launchq_core::port::OrderedStore;
use std::ops::Range;

/// Contiguous list store.
///
/// Head removal shifts the whole list; fine for the short queues an admin
/// reorders by hand. Use `RingStore` when the head churns.
#[derive(Debug, Clone, Default)]
pub struct VecStore<T> {
    items: Vec<T>,
}

impl<T> VecStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T: Identity> OrderedStore<T> for VecStore<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push_back(&mut self, id: T) {
        self.items.push(id);
    }

    fn push_front(&mut self, id: T) {
        self.items.insert(0, id);
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    fn position(&self, id: &T) -> Option<usize> {
        self.items.iter().position(|item| item == id)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    fn slice(&self, range: Range<usize>) -> Vec<T> {
        self.items[range].to_vec()
    }
}
