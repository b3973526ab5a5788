//! Model lifecycle state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where a model is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Built locally and not yet turned into parts.
    Local,
    /// Parts have been generated for sending.
    Generated,
    /// Reconstructed from parts delivered by a transport.
    Received,
}

/// Shared destruction flag.
///
/// Clones observe the same flag, so a handle taken before an in-flight
/// generation can abort that generation's delivery from another task.
#[derive(Debug, Clone, Default)]
pub struct DestroyHandle(Arc<AtomicBool>);

impl DestroyHandle {
    /// Marks the model destroyed. Idempotent.
    pub fn destroy(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once the model has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
