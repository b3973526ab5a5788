//! Media inspection port used by generation-time inspection steps.

use crate::content::domain::Blob;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for media probe operations.
pub type MediaProbeResult<T> = Result<T, MediaProbeError>;

/// Metadata decoded from an audio payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioMetadata {
    /// Playback length in seconds.
    pub duration_seconds: f64,
}

/// Pixel dimensions decoded from an image payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u64,
    /// Height in pixels.
    pub height: u64,
}

/// Decodes media metadata from local blobs.
///
/// Calls may suspend for as long as decoding takes. Failures are treated as
/// non-fatal by the generation pipeline.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Reads the duration of an audio blob.
    async fn probe_audio(&self, blob: &Blob) -> MediaProbeResult<AudioMetadata>;

    /// Reads the dimensions of an image blob.
    async fn probe_image(&self, blob: &Blob) -> MediaProbeResult<ImageDimensions>;
}

/// Errors returned by media probe adapters.
#[derive(Debug, Clone, Error)]
pub enum MediaProbeError {
    /// The payload could not be decoded.
    #[error("unreadable {mime_type} payload: {reason}")]
    Unreadable {
        /// MIME type of the blob.
        mime_type: String,
        /// Decoder diagnostic.
        reason: String,
    },

    /// Generic runtime failure.
    #[error("media probe runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl MediaProbeError {
    /// Creates an unreadable payload error for a blob.
    #[must_use]
    pub fn unreadable(blob: &Blob, reason: impl Into<String>) -> Self {
        Self::Unreadable {
            mime_type: blob.mime_type().to_owned(),
            reason: reason.into(),
        }
    }

    /// Wraps a runtime error from the probe adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
