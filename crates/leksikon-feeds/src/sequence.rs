//! Latest-wins sequencing for overlapping remote requests.
//!
//! Each request takes a [`Ticket`] from [`LatestWins::issue`] before it
//! starts. When it finishes, its outcome, success or failure alike, is
//! offered back with that ticket and applied only if no newer ticket has been
//! issued in the meantime. A slow, superseded response is dropped instead of
//! overwriting the newer request's result.
//!
//! Applied outcomes are published on a `tokio::sync::watch` channel so
//! consumers can either await changes or poll [`LatestWins::latest`].

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

/// Sequence number a request was issued under. Higher is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// An outcome together with the ticket it was applied under.
#[derive(Debug, Clone)]
pub struct Applied<T> {
    pub ticket: Ticket,
    pub value: T,
}

#[derive(Debug)]
pub struct LatestWins<T> {
    issued: AtomicU64,
    tx: watch::Sender<Option<Applied<T>>>,
}

impl<T> Default for LatestWins<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestWins<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            issued: AtomicU64::new(0),
            tx,
        }
    }

    /// Issue the next ticket. Every ticket issued before it is now stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply `value` if `ticket` is still the most recently issued one.
    /// Returns whether it was applied.
    pub fn offer(&self, ticket: Ticket, value: T) -> bool {
        let mut value = Some(value);
        let applied = self.tx.send_if_modified(|slot| {
            if !self.is_current(ticket) {
                return false;
            }
            *slot = value.take().map(|value| Applied { ticket, value });
            true
        });
        if !applied {
            tracing::debug!(ticket = ticket.0, "sequence: stale outcome dropped");
        }
        applied
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Applied<T>>> {
        self.tx.subscribe()
    }

    /// Ticket of the outcome currently applied, if any.
    pub fn applied_ticket(&self) -> Option<Ticket> {
        self.tx.borrow().as_ref().map(|a| a.ticket)
    }
}

impl<T: Clone> LatestWins<T> {
    pub fn latest(&self) -> Option<Applied<T>> {
        self.tx.borrow().clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
