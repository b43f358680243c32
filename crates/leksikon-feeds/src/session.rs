//! Debounced remote search.
//!
//! [`SearchSession::submit`] is called on every keystroke. It aborts the
//! pending debounce timer and starts a new one; when a timer survives the
//! full delay it hands the query to a detached fetch task. Fetches that are
//! already in flight are not aborted. They race, and [`LatestWins`] keeps
//! only the outcome of the most recently submitted query.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use leksikon_core::RegionalEntry;

use crate::client::CorpusClient;
use crate::error::FetchError;
use crate::sequence::{Applied, LatestWins, Ticket};

/// Result of one submitted query.
#[derive(Debug, Clone)]
pub struct SearchUpdate {
    pub query: String,
    pub outcome: Result<Vec<RegionalEntry>, Arc<FetchError>>,
}

impl SearchUpdate {
    pub fn entries(&self) -> &[RegionalEntry] {
        self.outcome.as_deref().unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err().map(|e| e.as_ref())
    }
}

pub struct SearchSession {
    client: Arc<CorpusClient>,
    delay: Duration,
    results: Arc<LatestWins<SearchUpdate>>,
    pending: Option<JoinHandle<()>>,
}

impl SearchSession {
    /// Must be created inside a Tokio runtime; `submit` spawns onto it.
    pub fn new(client: CorpusClient, delay: Duration) -> Self {
        Self {
            client: Arc::new(client),
            delay,
            results: Arc::new(LatestWins::new()),
            pending: None,
        }
    }

    /// Schedule a search for `query` after the debounce delay, cancelling any
    /// search still waiting out its delay.
    ///
    /// A blank query is applied immediately as an empty result, without a
    /// request.
    pub fn submit(&mut self, query: impl Into<String>) -> Ticket {
        let query = query.into();
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let ticket = self.results.issue();

        if query.trim().is_empty() {
            self.results.offer(
                ticket,
                SearchUpdate {
                    query,
                    outcome: Ok(Vec::new()),
                },
            );
            return ticket;
        }

        let client = Arc::clone(&self.client);
        let results = Arc::clone(&self.results);
        let delay = self.delay;
        tracing::debug!(ticket = ticket.get(), %query, "session: search scheduled");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !results.is_current(ticket) {
                return;
            }
            // Detached so that a later submit only cancels the timer above.
            tokio::spawn(fetch(client, results, ticket, query));
        }));
        ticket
    }

    /// Cancel the pending timer without submitting anything new.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn latest(&self) -> Option<Applied<SearchUpdate>> {
        self.results.latest()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Applied<SearchUpdate>>> {
        self.results.subscribe()
    }

    pub fn applied_ticket(&self) -> Option<Ticket> {
        self.results.applied_ticket()
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn fetch(
    client: Arc<CorpusClient>,
    results: Arc<LatestWins<SearchUpdate>>,
    ticket: Ticket,
    query: String,
) {
    let outcome = client.search(&query).await.map_err(|err| {
        tracing::warn!(%query, error = %err, "session: remote search failed");
        Arc::new(err)
    });
    results.offer(ticket, SearchUpdate { query, outcome });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
