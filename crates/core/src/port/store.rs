// Ordered Store Port (Interface)

use crate::domain::Identity;
use std::ops::Range;

/// Backing sequence for a reorderable queue.
///
/// Implementations are plain single-threaded containers; the queue provides
/// all locking. Indices are zero-based from the head. Callers only pass
/// indices below `len()` and ranges within `0..len()`.
pub trait OrderedStore<T: Identity>: Send + 'static {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_back(&mut self, id: T);

    fn push_front(&mut self, id: T);

    fn pop_front(&mut self) -> Option<T>;

    /// Index of `id`, scanning from the head
    fn position(&self, id: &T) -> Option<usize>;

    /// Remove the element at `index`, shifting later elements towards the head
    fn remove_at(&mut self, index: usize) -> Option<T>;

    fn swap(&mut self, a: usize, b: usize);

    /// Clone the elements in `range`, head first
    fn slice(&self, range: Range<usize>) -> Vec<T>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Smallest store that satisfies the port, for unit tests in this crate.
    ///
    /// Same behaviour as the adapter crate's `VecStore`, which core cannot
    /// depend on; both are checked against the same queue tests.
    #[derive(Debug, Default)]
    pub struct MockStore<T>(Vec<T>);

    impl<T> MockStore<T> {
        pub fn new() -> Self {
            Self(Vec::new())
        }
    }

    impl<T: Identity> OrderedStore<T> for MockStore<T> {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn push_back(&mut self, id: T) {
            self.0.push(id);
        }

        fn push_front(&mut self, id: T) {
            self.0.insert(0, id);
        }

        fn pop_front(&mut self) -> Option<T> {
            self.remove_at(0)
        }

        fn position(&self, id: &T) -> Option<usize> {
            self.0.iter().position(|item| item == id)
        }

        fn remove_at(&mut self, index: usize) -> Option<T> {
            (index < self.0.len()).then(|| self.0.remove(index))
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.0.swap(a, b);
        }

        fn slice(&self, range: Range<usize>) -> Vec<T> {
            self.0[range].to_vec()
        }
    }
}
