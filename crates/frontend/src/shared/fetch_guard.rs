//! Generation counter that keeps late fetch results away from torn-down views.
//!
//! Each load takes a ticket; teardown (or a newer load) moves the generation
//! forward, and a result is applied only while its ticket is still current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    current: Arc<AtomicU64>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new attempt. Tickets issued earlier become stale.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks every outstanding ticket stale, e.g. when the owning view is dropped.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}
