//! Outbound composition: generate parts and hand them to a transport.

use std::sync::Arc;

use tracing::debug;

use crate::content::{
    domain::ModelResult,
    model::{self, ContentModel, Generation},
    ports::PartTransport,
};

/// What happened to a send request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The transport accepted the parts.
    Sent {
        /// Number of parts handed over, root included.
        part_count: usize,
    },
    /// The model was destroyed during generation; nothing was sent.
    Abandoned,
}

/// Sends local models through a [`PartTransport`].
#[derive(Debug)]
pub struct MessageComposer<T>
where
    T: PartTransport,
{
    transport: Arc<T>,
}

impl<T> Clone for MessageComposer<T>
where
    T: PartTransport,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> MessageComposer<T>
where
    T: PartTransport,
{
    /// Creates a composer over a transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Generates the model's parts and sends them.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Transport`](crate::content::domain::ModelError::Transport)
    /// when the transport rejects the parts, or propagates generation errors.
    pub async fn send<M>(&self, model: &mut M) -> ModelResult<SendOutcome>
    where
        M: ContentModel + ?Sized,
    {
        let type_name = model.core().descriptor().type_name();
        match model::generate_parts(model).await? {
            Generation::Ready(parts) => {
                let part_count = parts.len();
                self.transport.send(parts).await?;
                debug!(type_name, part_count, "sent message parts");
                Ok(SendOutcome::Sent { part_count })
            }
            Generation::Abandoned => {
                debug!(type_name, "model destroyed before send; nothing sent");
                Ok(SendOutcome::Abandoned)
            }
        }
    }
}
