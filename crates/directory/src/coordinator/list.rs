//! Customer list coordinator.
//!
//! Owns the state behind the searchable, paginated customer list screen:
//! the current query, the fetched page, and the fetch lifecycle. Fetches
//! overlap freely; responses are applied last-write-wins by issuance
//! order, so a slow early response can never clobber a newer one.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, instrument, warn};

use rolodex_core::{CustomerId, CustomerRecord, ListQuery, SortKey};

use crate::client::DirectoryClient;
use crate::config::DirectoryConfig;

/// Lifecycle of the most recent list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been issued yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch completed and its page is applied.
    Ready,
    /// The latest fetch failed; prior records are left intact.
    Failed(String),
}

/// Immutable view of the list state at one point in time.
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    /// The query the screen is currently showing or loading.
    pub query: ListQuery,
    /// Fetch lifecycle phase.
    pub phase: FetchPhase,
    /// Records from the most recently applied page.
    pub records: Vec<CustomerRecord>,
    /// Total matching records across all pages.
    pub total: u64,
}

impl ListSnapshot {
    /// Number of pages at the current page size, rounding up.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.query.page_size == 0 {
            return 0;
        }
        u32::try_from(self.total.div_ceil(u64::from(self.query.page_size))).unwrap_or(u32::MAX)
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }
}

struct ListState {
    query: ListQuery,
    phase: FetchPhase,
    records: Vec<CustomerRecord>,
    total: u64,
    /// Issuance counter for fetches. Bumped under this lock so issuance
    /// order and `latest_fetch` can never disagree.
    fetch_seq: u64,
    /// Issuance number of the newest fetch; older completions are discarded.
    latest_fetch: u64,
    /// Issuance counter for debounce windows; only the newest token fires.
    debounce_seq: u64,
}

struct ListInner {
    client: DirectoryClient,
    state: Mutex<ListState>,
    debounce: Duration,
}

/// Coordinator for the customer list screen.
///
/// Cheap to clone; all clones share one state. Search input is debounced,
/// pagination changes fetch immediately, and every mutation goes back to
/// the Directory Service followed by a refetch - the service stays the
/// single source of truth.
#[derive(Clone)]
pub struct ListCoordinator {
    inner: Arc<ListInner>,
}

impl ListCoordinator {
    /// Create a coordinator over `client`, taking page size and debounce
    /// window from `config`.
    #[must_use]
    pub fn new(client: DirectoryClient, config: &DirectoryConfig) -> Self {
        Self {
            inner: Arc::new(ListInner {
                client,
                state: Mutex::new(ListState {
                    query: ListQuery::with_page_size(config.page_size),
                    phase: FetchPhase::Idle,
                    records: Vec::new(),
                    total: 0,
                    fetch_seq: 0,
                    latest_fetch: 0,
                    debounce_seq: 0,
                }),
                debounce: config.debounce,
            }),
        }
    }

    /// Take an immutable snapshot of the current list state.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.lock_state();
        ListSnapshot {
            query: state.query.clone(),
            phase: state.phase.clone(),
            records: state.records.clone(),
            total: state.total,
        }
    }

    /// Record a keystroke in the search box.
    ///
    /// Updates the search term and resets to the first page immediately,
    /// then arms the debounce timer: the fetch fires only if no further
    /// keystroke arrives within the window, so a burst of typing costs a
    /// single request for the final text.
    ///
    /// Must be called within a Tokio runtime; the debounced fetch runs on
    /// a spawned task.
    #[instrument(skip(self, term))]
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        let token = {
            let mut state = self.lock_state();
            state.query.search_term = term;
            state.query.page_index = 0;
            state.debounce_seq += 1;
            state.debounce_seq
        };

        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(this.inner.debounce).await;
            if this.lock_state().debounce_seq == token {
                this.fetch().await;
            } else {
                debug!(token, "debounced fetch superseded by newer keystroke");
            }
        });
    }

    /// Jump to a page. Fetches immediately.
    pub async fn set_page(&self, page_index: u32) {
        {
            let mut state = self.lock_state();
            state.query.page_index = page_index;
        }
        self.fetch().await;
    }

    /// Change the page size. Fetches immediately; the page index is left
    /// alone (only search-term changes reset it).
    pub async fn set_page_size(&self, page_size: u32) {
        {
            let mut state = self.lock_state();
            state.query.page_size = page_size;
        }
        self.fetch().await;
    }

    /// Change the sort key. Fetches immediately; the page index is left
    /// alone (only search-term changes reset it).
    pub async fn set_sort_key(&self, sort_key: SortKey) {
        {
            let mut state = self.lock_state();
            state.query.sort_key = sort_key;
        }
        self.fetch().await;
    }

    /// Replace the whole query and fetch once.
    ///
    /// Bypasses the search debounce; meant for restoring a saved view or
    /// one-shot callers, not for keystroke handling.
    pub async fn apply_query(&self, query: ListQuery) {
        {
            let mut state = self.lock_state();
            state.query = query;
        }
        self.fetch().await;
    }

    /// Refetch the current query.
    pub async fn refresh(&self) {
        self.fetch().await;
    }

    /// Delete a record, gated on an explicit confirmation.
    ///
    /// A declined confirmation (`confirmed == false`) issues no request at
    /// all. An accepted one issues exactly one `DELETE` followed by a
    /// refetch of the current page. Returns whether the record was deleted.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_record(&self, id: &CustomerId, confirmed: bool) -> bool {
        if !confirmed {
            debug!("delete declined, no request issued");
            return false;
        }

        match self.inner.client.delete_customer(id).await {
            Ok(()) => {
                self.fetch().await;
                true
            }
            Err(e) => {
                warn!(error = %e, "delete failed");
                let mut state = self.lock_state();
                state.phase = FetchPhase::Failed(e.to_string());
                false
            }
        }
    }

    /// Issue a fetch for the current query and apply the response if it is
    /// still the newest one issued.
    async fn fetch(&self) {
        // Sequence number and latest_fetch are assigned under one lock so
        // issuance order matches the staleness check below.
        let (seq, query) = {
            let mut state = self.lock_state();
            state.fetch_seq += 1;
            let seq = state.fetch_seq;
            state.phase = FetchPhase::Loading;
            state.latest_fetch = seq;
            (seq, state.query.clone())
        };

        let result = self.inner.client.list_customers(&query).await;

        let mut state = self.lock_state();
        if state.latest_fetch != seq {
            // A newer fetch was issued while this one was in flight.
            debug!(seq, latest = state.latest_fetch, "discarding stale page");
            return;
        }

        match result {
            Ok(page) => {
                state.records = page.records;
                state.total = page.total;
                state.phase = FetchPhase::Ready;
            }
            Err(e) => {
                warn!(error = %e, "list fetch failed");
                // Keep the previously applied records visible.
                state.phase = FetchPhase::Failed(e.to_string());
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ListState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let snapshot = ListSnapshot {
            query: ListQuery::with_page_size(10),
            phase: FetchPhase::Ready,
            records: Vec::new(),
            total: 57,
        };
        assert_eq!(snapshot.page_count(), 6);
    }

    #[test]
    fn test_page_count_exact_multiple() {
        let snapshot = ListSnapshot {
            query: ListQuery::with_page_size(10),
            phase: FetchPhase::Ready,
            records: Vec::new(),
            total: 60,
        };
        assert_eq!(snapshot.page_count(), 6);
    }

    #[test]
    fn test_is_loading() {
        let snapshot = ListSnapshot {
            query: ListQuery::default(),
            phase: FetchPhase::Loading,
            records: Vec::new(),
            total: 0,
        };
        assert!(snapshot.is_loading());
    }
}
