//! Pipeline configuration.

use std::time::Duration;

/// Default bound on a single inspection step or stream fetch.
const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of buffered change notifications per model.
const DEFAULT_CHANGE_CAPACITY: usize = 64;

/// Tuning knobs for the generation pipeline and change broadcasting.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tessera::config::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.inspection_timeout, Some(Duration::from_secs(30)));
///
/// let unbounded = PipelineConfig::unbounded();
/// assert!(unbounded.inspection_timeout.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Upper bound on one inspection step; `None` waits indefinitely.
    ///
    /// A step that exceeds the bound is handled like a failed inspection.
    pub inspection_timeout: Option<Duration>,
    /// Upper bound on one stream fetch; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// Capacity of each model's change notification channel.
    pub change_channel_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inspection_timeout: Some(DEFAULT_STEP_TIMEOUT),
            fetch_timeout: Some(DEFAULT_STEP_TIMEOUT),
            change_channel_capacity: DEFAULT_CHANGE_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration that never times out a suspended step.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            inspection_timeout: None,
            fetch_timeout: None,
            ..Self::default()
        }
    }

    /// Sets the inspection step bound.
    #[must_use]
    pub const fn with_inspection_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.inspection_timeout = timeout;
        self
    }

    /// Sets the stream fetch bound.
    #[must_use]
    pub const fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Sets the change channel capacity; zero is raised to one.
    #[must_use]
    pub const fn with_change_channel_capacity(mut self, capacity: usize) -> Self {
        self.change_channel_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}
