// Wait Limits - deadline and cancellation for blocking dequeues

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

type Waker = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct CancelState {
    cancelled: bool,
    next_key: u64,
    wakers: Vec<(u64, Waker)>,
}

/// Cancellation signal shared between a waiter and whoever may abort it.
///
/// Cloning yields another handle to the same signal. Once cancelled it stays
/// cancelled.
#[derive(Clone, Default)]
pub struct CancelToken {
    state: Arc<Mutex<CancelState>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel and wake every registered waiter
    pub fn cancel(&self) {
        let wakers = {
            let mut state = self.state.lock();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            std::mem::take(&mut state.wakers)
        };
        // Run outside the token lock: wakers take the queue lock.
        for (_, wake) in wakers {
            wake();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.lock().cancelled
    }

    /// Register a wake callback.
    ///
    /// Returns `None` when the token is already cancelled. The callback is
    /// dropped together with the returned registration.
    pub(crate) fn register(&self, waker: Waker) -> Option<CancelRegistration> {
        let mut state = self.state.lock();
        if state.cancelled {
            return None;
        }
        let key = state.next_key;
        state.next_key += 1;
        state.wakers.push((key, waker));
        Some(CancelRegistration {
            token: self.clone(),
            key,
        })
    }

    #[cfg(test)]
    pub(crate) fn registered(&self) -> usize {
        self.state.lock().wakers.len()
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CancelToken")
            .field("cancelled", &state.cancelled)
            .field("registered", &state.wakers.len())
            .finish()
    }
}

/// Live waker registration; deregisters on drop
pub(crate) struct CancelRegistration {
    token: CancelToken,
    key: u64,
}

impl Drop for CancelRegistration {
    fn drop(&mut self) {
        let key = self.key;
        self.token.state.lock().wakers.retain(|(k, _)| *k != key);
    }
}

/// How long a blocking dequeue may wait
#[derive(Debug, Clone, Default)]
pub struct Deadline {
    at: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl Deadline {
    /// Wait until an element arrives (or the attached token is cancelled)
    pub fn never() -> Self {
        Self::default()
    }

    pub fn at(instant: Instant) -> Self {
        Self {
            at: Some(instant),
            cancel: None,
        }
    }

    /// Expire `timeout` from now; a timeout too large to represent never expires
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(timeout),
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn instant(&self) -> Option<Instant> {
        self.at
    }

    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}
