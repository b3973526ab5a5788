//! Transport that records every sent message.

use crate::content::{
    domain::ContentPart,
    ports::{PartTransport, PartTransportError, PartTransportResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe transport keeping sent part lists in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<RwLock<Vec<Vec<ContentPart>>>>,
}

impl RecordingTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message sent so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a runtime error when lock acquisition fails.
    pub fn sent(&self) -> PartTransportResult<Vec<Vec<ContentPart>>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| PartTransportError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(sent.clone())
    }
}

#[async_trait]
impl PartTransport for RecordingTransport {
    async fn send(&self, parts: Vec<ContentPart>) -> PartTransportResult<()> {
        if parts.is_empty() {
            return Err(PartTransportError::Rejected("message has no parts".to_owned()));
        }
        let mut sent = self
            .sent
            .write()
            .map_err(|err| PartTransportError::runtime(std::io::Error::other(err.to_string())))?;
        sent.push(parts);
        Ok(())
    }
}
