//! Collaborators handed to every model instance.

use crate::config::PipelineConfig;
use crate::content::adapters::memory::{InMemoryPartFetcher, StaticMediaProbe};
use crate::content::ports::{MediaProbe, PartFetcher};
use std::fmt;
use std::sync::Arc;

/// Ports and configuration shared by the models of one client.
///
/// Cloning is cheap; every clone refers to the same adapters.
#[derive(Clone)]
pub struct ModelContext {
    probe: Arc<dyn MediaProbe>,
    fetcher: Arc<dyn PartFetcher>,
    config: PipelineConfig,
}

impl ModelContext {
    /// Creates a context with the default pipeline configuration.
    #[must_use]
    pub fn new(probe: Arc<dyn MediaProbe>, fetcher: Arc<dyn PartFetcher>) -> Self {
        Self {
            probe,
            fetcher,
            config: PipelineConfig::default(),
        }
    }

    /// Creates a context backed by in-memory adapters that resolve nothing.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(
            Arc::new(StaticMediaProbe::new()),
            Arc::new(InMemoryPartFetcher::new()),
        )
    }

    /// Replaces the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the media probe.
    #[must_use]
    pub fn probe(&self) -> &dyn MediaProbe {
        self.probe.as_ref()
    }

    /// Returns the part fetcher.
    #[must_use]
    pub fn fetcher(&self) -> &dyn PartFetcher {
        self.fetcher.as_ref()
    }

    /// Returns the pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

impl fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
