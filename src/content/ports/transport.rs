//! Outbound send port consumed by the message composer.

use crate::content::domain::ContentPart;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type PartTransportResult<T> = Result<T, PartTransportError>;

/// Moves an ordered part list to its destination.
///
/// Delivery guarantees belong to the implementation.
#[async_trait]
pub trait PartTransport: Send + Sync {
    /// Sends the parts of one message, root first.
    async fn send(&self, parts: Vec<ContentPart>) -> PartTransportResult<()>;
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum PartTransportError {
    /// The destination refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// Generic runtime failure.
    #[error("transport runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl PartTransportError {
    /// Wraps a runtime error from the transport adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
