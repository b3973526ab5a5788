//! Generation pipeline: local model to ordered wire parts.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::ContentModel;
use crate::content::domain::{Blob, ContentPart, ModelError, ModelResult, Role};
use crate::content::ports::MediaProbeError;

/// Outcome of [`generate_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Root part first, then one child per present source in declared order.
    Ready(Vec<ContentPart>),
    /// The model was destroyed while generation was suspended; no parts
    /// were built.
    Abandoned,
}

/// Failure of a single inspection step. Never fatal to generation.
#[derive(Debug, Clone, Error)]
pub enum InspectionError {
    /// The media probe could not read the source.
    #[error(transparent)]
    Probe(#[from] MediaProbeError),

    /// The step produced a value the type's schema rejects.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The step exceeded the configured inspection timeout.
    #[error("inspection of '{role}' timed out after {after:?}")]
    TimedOut {
        /// Role of the source being inspected.
        role: Role,
        /// The configured bound.
        after: Duration,
    },
}

/// Produces the ordered part list for a local model.
///
/// Inspection steps run sequentially in the order the type declares its
/// sources; absent sources are skipped without suspending. A failed or
/// timed-out step is logged and the pipeline continues. If the model is
/// destroyed before the parts are built, [`Generation::Abandoned`] is
/// returned and the model is left untouched.
///
/// The inspection timeout relies on the tokio timer, so a bounded
/// configuration must run inside a tokio runtime with time enabled.
///
/// # Errors
///
/// Returns [`ModelError::MalformedPayload`](crate::content::domain::ModelError::MalformedPayload)
/// if the root body cannot be serialised.
pub async fn generate_parts<M>(model: &mut M) -> ModelResult<Generation>
where
    M: ContentModel + ?Sized,
{
    let type_name = model.core().descriptor().type_name();
    let sources = model.core().pending_sources();
    let timeout = model.core().context().config().inspection_timeout;

    for (role, blob) in &sources {
        if model.core().is_destroyed() {
            break;
        }
        debug!(type_name, role = %role, "running inspection step");
        if let Err(err) = run_step(model, role, blob, timeout).await {
            warn!(
                type_name,
                role = %role,
                error = %err,
                "inspection step failed; continuing without its metadata"
            );
        }
    }

    if model.core().is_destroyed() {
        debug!(type_name, "model destroyed during generation; discarding parts");
        return Ok(Generation::Abandoned);
    }

    let parts = model.core_mut().finish_generation(&sources)?;
    debug!(type_name, part_count = parts.len(), "generated parts");
    Ok(Generation::Ready(parts))
}

/// Callback form of [`generate_parts`].
///
/// `on_ready` is invoked exactly once with the ordered parts, or never if
/// the generation was abandoned or failed.
///
/// # Errors
///
/// Propagates errors from [`generate_parts`].
pub async fn generate_parts_with<M, F>(model: &mut M, on_ready: F) -> ModelResult<()>
where
    M: ContentModel + ?Sized,
    F: FnOnce(Vec<ContentPart>) + Send,
{
    if let Generation::Ready(parts) = generate_parts(model).await? {
        on_ready(parts);
    }
    Ok(())
}

async fn run_step<M>(
    model: &mut M,
    role: &Role,
    blob: &Blob,
    timeout: Option<Duration>,
) -> Result<(), InspectionError>
where
    M: ContentModel + ?Sized,
{
    let Some(limit) = timeout else {
        return model.inspect_source(role, blob).await;
    };
    match tokio::time::timeout(limit, model.inspect_source(role, blob)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => Err(InspectionError::TimedOut {
            role: role.clone(),
            after: limit,
        }),
    }
}
