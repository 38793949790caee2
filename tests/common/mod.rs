//! Shared test utilities and fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use costar::dispatch::{MemoryStore, Query, QueryDispatcher, Row};
use costar::{Autocomplete, AutocompleteBuilder, DispatchError, HostField};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// Re-export canonical fixtures from costar::testing
pub use costar::testing::{make_candidate, make_candidates, sample_dataset};

// ============================================================================
// STORES
// ============================================================================

/// The sample dataset, in memory.
pub fn memory_store() -> Arc<dyn QueryDispatcher> {
    Arc::new(MemoryStore::new(sample_dataset()))
}

/// Memory store with a per-term response delay and a log of every query.
///
/// Lets tests make an older lookup resolve after a newer one.
pub struct DelayedStore {
    inner: MemoryStore,
    delays: HashMap<String, Duration>,
    failing: bool,
    pub log: Mutex<Vec<Query>>,
}

impl DelayedStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(sample_dataset()),
            delays: HashMap::new(),
            failing: false,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Answer lookups for `term` after `ms` milliseconds.
    pub fn delay(mut self, term: &str, ms: u64) -> Self {
        self.delays.insert(term.to_string(), Duration::from_millis(ms));
        self
    }

    /// Fail every query.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Terms looked up so far, in order.
    pub fn terms(&self) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter_map(|q| match q {
                Query::PeopleByName { term, .. } | Query::TitlesByTitle { term, .. } => {
                    Some(term.clone())
                }
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl QueryDispatcher for DelayedStore {
    async fn query(&self, query: &Query) -> Result<Vec<Row>, DispatchError> {
        self.log.lock().push(query.clone());
        let delay = match query {
            Query::PeopleByName { term, .. } | Query::TitlesByTitle { term, .. } => {
                self.delays.get(term).copied().unwrap_or_default()
            }
            _ => Duration::ZERO,
        };
        tokio::time::sleep(delay).await;
        if self.failing {
            return Err(DispatchError::Unsupported("store offline".into()));
        }
        Ok(self.inner.execute(query))
    }
}

// ============================================================================
// CONTROLLERS
// ============================================================================

/// A people field over `store` with the given debounce.
pub fn person_controller(store: Arc<dyn QueryDispatcher>, debounce_ms: u64) -> Autocomplete {
    AutocompleteBuilder::new("actor1", HostField::new())
        .debounce(Duration::from_millis(debounce_ms))
        .fetch_fn(costar::suggest::people_source(store, 50))
        .render(costar::render::person_suggestion)
        .build()
        .unwrap()
}

/// Display texts currently in a controller's list.
pub fn shown(ac: &Autocomplete) -> Vec<String> {
    ac.state()
        .items()
        .iter()
        .map(|c| c.display_text.clone())
        .collect()
}

/// Advance the paused clock by `ms`, letting every ready task run.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
