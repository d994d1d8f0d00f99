//! Staleness guard for a single UI slot.
//!
//! When a user re-selects before the previous fetch returns, both requests
//! complete independently. A [`SelectionSlot`] hands out increasing
//! generations; only a result whose ticket is still the newest is accepted.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One logical slot, e.g. "the act shown in the detail pane".
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct SelectionSlot {
    generation: Arc<AtomicU64>,
}

/// Proof of which request generation a result belongs to.
#[derive(Debug, Clone)]
pub struct SelectionTicket {
    generation: u64,
    slot: Arc<AtomicU64>,
}

impl SelectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> SelectionTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SelectionTicket {
            generation,
            slot: Arc::clone(&self.generation),
        }
    }

    /// Supersede outstanding tickets without starting a request.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Await `request` under a ticket taken now, at call time, not on first
    /// poll. `None` if a later call superseded it.
    pub fn run<F>(&self, request: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let ticket = self.begin();
        async move { ticket.accept(request.await) }
    }
}

impl SelectionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.slot.load(Ordering::SeqCst) == self.generation
    }

    /// Hand `value` back only if no newer ticket exists.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            tracing::debug!(
                generation = self.generation,
                current = self.slot.load(Ordering::SeqCst),
                "Discarding stale result"
            );
            None
        }
    }
}
