//! Lazy body resolution port.

use crate::content::domain::{ContentPart, PartId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for part fetch operations.
pub type PartFetchResult<T> = Result<T, PartFetchError>;

/// Resolves streamable URLs for parts whose bodies are not resident.
#[async_trait]
pub trait PartFetcher: Send + Sync {
    /// Returns a URL from which the part's body can be streamed.
    async fn fetch_stream(&self, part: &ContentPart) -> PartFetchResult<String>;
}

/// Errors returned by part fetcher adapters.
#[derive(Debug, Clone, Error)]
pub enum PartFetchError {
    /// The fetcher has no location for this part.
    #[error("no stream available for part {0}")]
    NotAvailable(PartId),

    /// Generic runtime failure.
    #[error("part fetch runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl PartFetchError {
    /// Wraps a runtime error from the fetcher adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
