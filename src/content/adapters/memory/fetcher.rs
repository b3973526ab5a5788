//! Part fetcher backed by an in-memory URL table.

use crate::content::{
    domain::{ContentPart, PartId},
    ports::{PartFetchError, PartFetchResult, PartFetcher},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory part fetcher.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPartFetcher {
    state: Arc<RwLock<InMemoryFetcherState>>,
}

#[derive(Debug, Default)]
struct InMemoryFetcherState {
    urls: HashMap<PartId, String>,
    fetches: usize,
}

impl InMemoryPartFetcher {
    /// Creates a fetcher that knows no parts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the stream URL for a part, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns a runtime error when lock acquisition fails.
    pub fn insert(&self, part_id: PartId, url: impl Into<String>) -> PartFetchResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PartFetchError::runtime(std::io::Error::other(err.to_string())))?;
        state.urls.insert(part_id, url.into());
        Ok(())
    }

    /// Returns how many fetches have been attempted.
    ///
    /// # Errors
    ///
    /// Returns a runtime error when lock acquisition fails.
    pub fn fetch_count(&self) -> PartFetchResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| PartFetchError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.fetches)
    }
}

#[async_trait]
impl PartFetcher for InMemoryPartFetcher {
    async fn fetch_stream(&self, part: &ContentPart) -> PartFetchResult<String> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PartFetchError::runtime(std::io::Error::other(err.to_string())))?;
        state.fetches = state.fetches.saturating_add(1);
        state
            .urls
            .get(&part.id())
            .cloned()
            .ok_or(PartFetchError::NotAvailable(part.id()))
    }
}
