//! Media probe returning preconfigured metadata.

use crate::content::{
    domain::Blob,
    ports::{AudioMetadata, ImageDimensions, MediaProbe, MediaProbeError, MediaProbeResult},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A probe invocation recorded by [`StaticMediaProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeCall {
    /// An audio probe for a blob of the given MIME type.
    Audio(String),
    /// An image probe for a blob of the given MIME type.
    Image(String),
}

/// Media probe that answers every request with fixed metadata.
///
/// Unconfigured media kinds fail with [`MediaProbeError::Unreadable`], which
/// makes the probe useful for exercising non-fatal inspection failures.
/// Optional delays let tests control how long each inspection suspends.
#[derive(Debug, Clone, Default)]
pub struct StaticMediaProbe {
    audio: Option<AudioMetadata>,
    image: Option<ImageDimensions>,
    audio_delay: Option<Duration>,
    image_delay: Option<Duration>,
    calls: Arc<Mutex<Vec<ProbeCall>>>,
}

impl StaticMediaProbe {
    /// Creates a probe that cannot read anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers audio probes with the given duration.
    #[must_use]
    pub const fn with_audio_duration(mut self, duration_seconds: f64) -> Self {
        self.audio = Some(AudioMetadata { duration_seconds });
        self
    }

    /// Answers image probes with the given dimensions.
    #[must_use]
    pub const fn with_image_dimensions(mut self, width: u64, height: u64) -> Self {
        self.image = Some(ImageDimensions { width, height });
        self
    }

    /// Suspends every audio probe for `delay` before answering.
    #[must_use]
    pub const fn with_audio_delay(mut self, delay: Duration) -> Self {
        self.audio_delay = Some(delay);
        self
    }

    /// Suspends every image probe for `delay` before answering.
    #[must_use]
    pub const fn with_image_delay(mut self, delay: Duration) -> Self {
        self.image_delay = Some(delay);
        self
    }

    /// Returns the probe calls made so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns a runtime error when lock acquisition fails.
    pub fn calls(&self) -> MediaProbeResult<Vec<ProbeCall>> {
        let calls = self
            .calls
            .lock()
            .map_err(|err| MediaProbeError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(calls.clone())
    }

    fn record(&self, call: ProbeCall) -> MediaProbeResult<()> {
        let mut calls = self
            .calls
            .lock()
            .map_err(|err| MediaProbeError::runtime(std::io::Error::other(err.to_string())))?;
        calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl MediaProbe for StaticMediaProbe {
    async fn probe_audio(&self, blob: &Blob) -> MediaProbeResult<AudioMetadata> {
        self.record(ProbeCall::Audio(blob.mime_type().to_owned()))?;
        if let Some(delay) = self.audio_delay {
            tokio::time::sleep(delay).await;
        }
        self.audio
            .ok_or_else(|| MediaProbeError::unreadable(blob, "no audio metadata configured"))
    }

    async fn probe_image(&self, blob: &Blob) -> MediaProbeResult<ImageDimensions> {
        self.record(ProbeCall::Image(blob.mime_type().to_owned()))?;
        if let Some(delay) = self.image_delay {
            tokio::time::sleep(delay).await;
        }
        self.image
            .ok_or_else(|| MediaProbeError::unreadable(blob, "no image dimensions configured"))
    }
}
