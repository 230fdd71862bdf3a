//! Customer search helpers
//!
//! Two page-level patterns used by the search UI: a most-recent-first
//! cache of past searches behind an injected key-value store, and a
//! debouncer so search-as-you-type only fires after the keystrokes go
//! quiet.

use parking_lot::Mutex;
use shared::models::Customer;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Storage key for the recent-search list
pub const RECENT_SEARCHES_KEY: &str = "recent_customer_searches";

/// Maximum number of recent searches kept
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Default quiet window for search-as-you-type
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// ============================================================================
// Recent Searches
// ============================================================================

/// Key-value store seam for persisted page state
///
/// The kiosk webview backs this with its local storage; tests and
/// headless embeddings use [`MemoryStore`].
pub trait SearchStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SearchStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }
}

/// Most-recent-first list of searched customers, deduped by name
pub struct RecentSearches<S: SearchStore> {
    store: S,
}

impl<S: SearchStore> RecentSearches<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the list; an absent or corrupt entry reads as empty
    pub fn all(&self) -> Vec<Customer> {
        self.store
            .get(RECENT_SEARCHES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Record a search, moving the customer to the front
    pub fn add(&self, customer: Customer) {
        let mut searches = self.all();
        searches.retain(|c| c.name != customer.name);
        searches.insert(0, customer);
        searches.truncate(MAX_RECENT_SEARCHES);

        match serde_json::to_string(&searches) {
            Ok(raw) => self.store.set(RECENT_SEARCHES_KEY, &raw),
            Err(err) => tracing::warn!(error = %err, "failed to persist recent searches"),
        }
    }
}

// ============================================================================
// Debouncer
// ============================================================================

/// Timer-gated trigger for search-as-you-type
///
/// Each call resets the pending timer; only the last call within the
/// quiet window actually fires.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` to run after the quiet window, cancelling any
    /// previously scheduled one
    pub fn trigger<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Cancel any pending trigger
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
