// Reorderable Queue - ordered identities with blocking dequeue

mod waiters;

use crate::domain::error::Result;
use crate::domain::wait::CancelRegistration;
use crate::domain::{
    AppliedOp, Deadline, Identity, QueueElement, QueueError, QueueOp, SwapOutcome, Window,
};
use crate::port::{
    OrderedStore, QueueConsumer, QueueObserver, QueueProducer, QueueReader, QueueReorder,
};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::debug;
use waiters::{Ticket, WaiterRegistry};

struct State<S> {
    store: S,
    waiters: WaiterRegistry,
}

struct Shared<T, S> {
    state: Mutex<State<S>>,
    observer: Option<Arc<dyn QueueObserver<T>>>,
}

impl<T, S> Shared<T, S> {
    /// Report an applied operation. Must be called with the state lock held.
    fn observe(&self, op: impl FnOnce() -> QueueOp<T>, outcome: &Result<T>)
    where
        T: Clone,
    {
        if let Some(observer) = &self.observer {
            observer.on_applied(&AppliedOp {
                op: op(),
                outcome: outcome.clone(),
            });
        }
    }
}

/// FIFO queue of unique identities that can be reordered at runtime.
///
/// Every operation runs under one lock per queue, so all operations are
/// linearizable and snapshots never show a half-applied mutation.
/// `dequeue_or_wait` sleeps without holding the lock; blocked callers are
/// served in the order they started waiting.
///
/// Cloning is cheap and yields another handle to the same queue.
pub struct ReorderableQueue<T, S> {
    shared: Arc<Shared<T, S>>,
}

impl<T, S> Clone for ReorderableQueue<T, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

fn not_found<T: Identity>(id: &T) -> QueueError {
    QueueError::NotFound(id.to_string())
}

impl<T, S> ReorderableQueue<T, S>
where
    T: Identity,
    S: OrderedStore<T>,
{
    /// Create an empty queue over `store`
    pub fn new(store: S) -> Self {
        Self::build(store, None)
    }

    /// Create a queue that reports every mutation to `observer`
    pub fn with_observer(store: S, observer: Arc<dyn QueueObserver<T>>) -> Self {
        Self::build(store, Some(observer))
    }

    fn build(store: S, observer: Option<Arc<dyn QueueObserver<T>>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    store,
                    waiters: WaiterRegistry::default(),
                }),
                observer,
            }),
        }
    }

    /// Append `id` at the tail and wake the longest waiter.
    ///
    /// Identities are unique: re-enqueueing one that is still queued fails
    /// with `Duplicate` and changes nothing.
    pub fn enqueue(&self, id: T) -> Result<T> {
        let mut state = self.shared.state.lock();
        let result = if state.store.position(&id).is_some() {
            Err(QueueError::Duplicate(id.to_string()))
        } else {
            state.store.push_back(id.clone());
            state.waiters.notify_head();
            Ok(id.clone())
        };
        self.shared.observe(|| QueueOp::Enqueue(id), &result);
        result
    }

    /// Remove and return the head without blocking
    pub fn dequeue(&self) -> Result<T> {
        let mut state = self.shared.state.lock();
        let result = state.store.pop_front().ok_or(QueueError::Empty);
        self.shared.observe(|| QueueOp::Dequeue, &result);
        result
    }

    /// Remove and return the head, waiting for one if the queue is empty.
    ///
    /// Waiters are served first come, first served. Expiry or cancellation
    /// returns `Timeout` or `Cancelled` and leaves the queue untouched, unless
    /// an element not owed to an earlier waiter is there to take.
    pub fn dequeue_or_wait(&self, deadline: Deadline) -> Result<T> {
        let mut state = self.shared.state.lock();

        // Take from the surplus only: every existing waiter still has an
        // element left for it, so arrivals never overtake a waiter's share.
        if state.store.len() > state.waiters.len() {
            if let Some(id) = state.store.pop_front() {
                let result = Ok(id);
                self.shared.observe(|| QueueOp::Dequeue, &result);
                return result;
            }
        }
        if deadline.is_cancelled() {
            return Err(QueueError::Cancelled);
        }
        if deadline.is_expired() {
            return Err(QueueError::Timeout);
        }

        let (ticket, signal) = state.waiters.register();
        // Registered under the queue lock: a cancel landing after the check
        // below blocks on the lock until this thread sleeps.
        let registration: Option<CancelRegistration> = match deadline.cancel_token() {
            Some(token) => token.register(self.cancel_waker(ticket)),
            None => None,
        };
        debug!(waiting = state.waiters.len(), "Waiting for next element");

        let result = loop {
            if state.waiters.is_head(ticket) {
                if let Some(id) = state.store.pop_front() {
                    break Ok(id);
                }
            }
            let give_up = if deadline.is_cancelled() {
                Some(QueueError::Cancelled)
            } else if deadline.instant().is_some_and(|at| Instant::now() >= at) {
                Some(QueueError::Timeout)
            } else {
                None
            };
            if let Some(err) = give_up {
                // Leaving anyway; an element beyond those owed to earlier
                // waiters is still this caller's to take.
                if state.store.len() > state.waiters.ahead_of(ticket) {
                    if let Some(id) = state.store.pop_front() {
                        break Ok(id);
                    }
                }
                break Err(err);
            }
            match deadline.instant() {
                Some(at) => {
                    signal.wait_until(&mut state, at);
                }
                None => signal.wait(&mut state),
            }
        };

        state.waiters.deregister(ticket);
        // Hand the turn on; covers both a claim that left elements behind
        // and a head that gave up after being signalled.
        if !state.store.is_empty() {
            state.waiters.notify_head();
        }
        drop(registration);

        match &result {
            Ok(_) => self.shared.observe(|| QueueOp::Dequeue, &result),
            Err(e) => debug!(error = %e, "Stopped waiting for next element"),
        }
        result
    }

    fn cancel_waker(&self, ticket: Ticket) -> Box<dyn Fn() + Send + Sync> {
        let shared: Weak<Shared<T, S>> = Arc::downgrade(&self.shared);
        Box::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.state.lock().waiters.notify(ticket);
            }
        })
    }

    /// Remove `id` wherever it sits; the rest keep their relative order
    pub fn remove(&self, id: &T) -> Result<T> {
        let mut state = self.shared.state.lock();
        let result = match state.store.position(id) {
            Some(index) => state.store.remove_at(index).ok_or_else(|| not_found(id)),
            None => Err(not_found(id)),
        };
        self.shared.observe(|| QueueOp::Remove(id.clone()), &result);
        result
    }

    /// Relocate `id` to the head
    pub fn move_to_front(&self, id: &T) -> Result<QueueElement<T>> {
        let mut state = self.shared.state.lock();
        let result = match state.store.position(id) {
            Some(index) => match state.store.remove_at(index) {
                Some(found) => {
                    state.store.push_front(found);
                    Ok(id.clone())
                }
                None => Err(not_found(id)),
            },
            None => Err(not_found(id)),
        };
        self.shared.observe(|| QueueOp::MoveToFront(id.clone()), &result);
        result.map(|id| QueueElement::new(id, 0))
    }

    /// Relocate `id` to the tail
    pub fn move_to_back(&self, id: &T) -> Result<QueueElement<T>> {
        let mut state = self.shared.state.lock();
        let result = match state.store.position(id) {
            Some(index) => match state.store.remove_at(index) {
                Some(found) => {
                    state.store.push_back(found);
                    Ok(id.clone())
                }
                None => Err(not_found(id)),
            },
            None => Err(not_found(id)),
        };
        let last = state.store.len().saturating_sub(1);
        self.shared.observe(|| QueueOp::MoveToBack(id.clone()), &result);
        result.map(|id| QueueElement::new(id, last))
    }

    /// Exchange the positions of `a` and `b`.
    ///
    /// Swapping a queued identity with itself is a no-op.
    pub fn swap(&self, a: &T, b: &T) -> Result<SwapOutcome<T>> {
        let mut state = self.shared.state.lock();
        let positions = match (state.store.position(a), state.store.position(b)) {
            (Some(pa), Some(pb)) => Ok((pa, pb)),
            (None, _) => Err(not_found(a)),
            (_, None) => Err(not_found(b)),
        };
        if let Ok((pa, pb)) = positions {
            state.store.swap(pa, pb);
        }
        let reported = positions.as_ref().map(|_| a.clone()).map_err(Clone::clone);
        self.shared
            .observe(|| QueueOp::Swap(a.clone(), b.clone()), &reported);
        positions.map(|(pa, pb)| SwapOutcome {
            a: QueueElement::new(a.clone(), pb),
            b: QueueElement::new(b.clone(), pa),
        })
    }

    /// Read a window; negative bounds fail with `InvalidArgument`
    pub fn get(&self, offset: Option<i64>, limit: Option<i64>) -> Result<Vec<QueueElement<T>>> {
        let window = Window::new(offset, limit)?;
        Ok(self.snapshot(window))
    }

    /// Consistent copy of the elements inside `window`
    pub fn snapshot(&self, window: Window) -> Vec<QueueElement<T>> {
        let state = self.shared.state.lock();
        let range = window.range(state.store.len());
        state
            .store
            .slice(range.clone())
            .into_iter()
            .zip(range)
            .map(|(id, position)| QueueElement::new(id, position))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.shared.state.lock().store.len()
    }

    /// Number of threads currently blocked in `dequeue_or_wait`
    pub fn waiting(&self) -> usize {
        self.shared.state.lock().waiters.len()
    }
}

impl<T: Identity, S: OrderedStore<T>> QueueProducer<T> for ReorderableQueue<T, S> {
    fn enqueue(&self, id: T) -> Result<T> {
        ReorderableQueue::enqueue(self, id)
    }
}

impl<T: Identity, S: OrderedStore<T>> QueueConsumer<T> for ReorderableQueue<T, S> {
    fn dequeue(&self) -> Result<T> {
        ReorderableQueue::dequeue(self)
    }

    fn dequeue_or_wait(&self, deadline: Deadline) -> Result<T> {
        ReorderableQueue::dequeue_or_wait(self, deadline)
    }
}

impl<T: Identity, S: OrderedStore<T>> QueueReorder<T> for ReorderableQueue<T, S> {
    fn remove(&self, id: &T) -> Result<T> {
        ReorderableQueue::remove(self, id)
    }

    fn move_to_front(&self, id: &T) -> Result<QueueElement<T>> {
        ReorderableQueue::move_to_front(self, id)
    }

    fn move_to_back(&self, id: &T) -> Result<QueueElement<T>> {
        ReorderableQueue::move_to_back(self, id)
    }

    fn swap(&self, a: &T, b: &T) -> Result<SwapOutcome<T>> {
        ReorderableQueue::swap(self, a, b)
    }
}

impl<T: Identity, S: OrderedStore<T>> QueueReader<T> for ReorderableQueue<T, S> {
    fn get(&self, offset: Option<i64>, limit: Option<i64>) -> Result<Vec<QueueElement<T>>> {
        ReorderableQueue::get(self, offset, limit)
    }

    fn count(&self) -> usize {
        ReorderableQueue::count(self)
    }
}
