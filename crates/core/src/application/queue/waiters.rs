// Waiter Registry - FIFO tickets for blocked dequeuers

use parking_lot::Condvar;
use std::collections::VecDeque;
use std::sync::Arc;

pub(crate) type Ticket = u64;

struct Waiter {
    ticket: Ticket,
    signal: Arc<Condvar>,
}

/// Blocked dequeuers in arrival order.
///
/// Only the head may claim an element; each waiter sleeps on its own
/// condition variable so a wake-up targets exactly one thread. All access
/// happens under the owning queue's lock.
#[derive(Default)]
pub(crate) struct WaiterRegistry {
    next_ticket: Ticket,
    waiters: VecDeque<Waiter>,
}

impl WaiterRegistry {
    /// Join the tail of the line
    pub(crate) fn register(&mut self) -> (Ticket, Arc<Condvar>) {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let signal = Arc::new(Condvar::new());
        self.waiters.push_back(Waiter {
            ticket,
            signal: Arc::clone(&signal),
        });
        (ticket, signal)
    }

    pub(crate) fn deregister(&mut self, ticket: Ticket) {
        if let Some(index) = self.waiters.iter().position(|w| w.ticket == ticket) {
            self.waiters.remove(index);
        }
    }

    pub(crate) fn is_head(&self, ticket: Ticket) -> bool {
        self.waiters.front().is_some_and(|w| w.ticket == ticket)
    }

    /// Number of waiters that arrived before `ticket`
    pub(crate) fn ahead_of(&self, ticket: Ticket) -> usize {
        self.waiters
            .iter()
            .position(|w| w.ticket == ticket)
            .unwrap_or(self.waiters.len())
    }

    /// Wake the longest-waiting thread, if any
    pub(crate) fn notify_head(&self) {
        if let Some(head) = self.waiters.front() {
            head.signal.notify_one();
        }
    }

    /// Wake one specific waiter (used by cancellation)
    pub(crate) fn notify(&self, ticket: Ticket) {
        if let Some(waiter) = self.waiters.iter().find(|w| w.ticket == ticket) {
            waiter.signal.notify_one();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.waiters.len()
    }
}
