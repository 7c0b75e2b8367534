use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Serial numbers for in-flight queries, enforcing last-request-wins.
///
/// The UI re-triggers a load whenever a selector changes, and concurrent
/// fetches resolve in no particular order. Issuing a [`Ticket`] per query
/// and accepting only results whose ticket is still the newest guarantees
/// a slow earlier response can never overwrite newer state.
///
/// # Examples
///
/// ```
/// use archroma::services::latest::RequestGuard;
///
/// let guard = RequestGuard::new();
/// let stale = guard.issue();
/// let current = guard.issue();
///
/// assert_eq!(guard.accept(stale, "old"), None);
/// assert_eq!(guard.accept(current, "new"), Some("new"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct RequestGuard {
    counter: Arc<AtomicU64>,
}

/// Proof that a query was the newest at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new query, invalidating all earlier tickets.
    pub fn issue(&self) -> Ticket {
        Ticket(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still belongs to the newest query.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass `value` through if the ticket is still current, discard it
    /// otherwise.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}
