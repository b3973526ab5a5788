//! Fallback model for content types nobody registered.

use serde_json::{Map, Value};
use std::any::Any;

use crate::content::{
    domain::Schema,
    model::{ContentModel, ModelContext, ModelCore},
};
use crate::type_registry::domain::ModelDescriptor;

/// Placeholder MIME type reported by the fallback's own descriptor.
pub const UNKNOWN_MIME_TYPE: &str = "application/vnd.tessera.unknown+json";

static DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("UnknownModel", UNKNOWN_MIME_TYPE, Schema::EMPTY)
        .with_labels("Unsupported Message", "Unsupported Messages");

/// Stands in for a message whose MIME type has no registered model.
///
/// Keeps the original MIME type and the raw root payload for inspection
/// and generic rendering. It declares no properties, so generating parts
/// from it does not reproduce the received content. It is never
/// registered, so it is only produced by
/// [`MessageAssembler`](crate::content::services::MessageAssembler).
#[derive(Debug)]
pub struct UnknownModel {
    core: ModelCore,
    original_mime_type: String,
    payload: Map<String, Value>,
}

impl UnknownModel {
    /// Creates a fallback for content of `original_mime_type`.
    #[must_use]
    pub fn with_mime_type(context: ModelContext, original_mime_type: impl Into<String>) -> Self {
        Self {
            core: ModelCore::new(&DESCRIPTOR, context),
            original_mime_type: original_mime_type.into(),
            payload: Map::new(),
        }
    }

    /// MIME type of the root part this model was built from.
    #[must_use]
    pub fn original_mime_type(&self) -> &str {
        &self.original_mime_type
    }

    /// Root payload as received, merged across edits.
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

impl ContentModel for UnknownModel {
    fn core(&self) -> &ModelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModelCore {
        &mut self.core
    }

    fn on_model_part(&mut self, payload: &Map<String, Value>, _is_edit: bool) {
        for (key, value) in payload {
            self.payload.insert(key.clone(), value.clone());
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
