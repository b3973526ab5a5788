//! Inbound assembly of delivered parts into typed models.

use tracing::{debug, warn};

use crate::content::{
    domain::{ContentPart, ModelResult},
    model::{self, ContentModel, ModelContext},
};
use crate::message_types::UnknownModel;
use crate::type_registry::services::TypeRegistry;

/// Turns the flat part list of a delivered message into a live model.
#[derive(Debug, Clone)]
pub struct MessageAssembler<'r> {
    registry: &'r TypeRegistry,
    context: ModelContext,
}

impl<'r> MessageAssembler<'r> {
    /// Creates an assembler resolving types through `registry`.
    #[must_use]
    pub const fn new(registry: &'r TypeRegistry, context: ModelContext) -> Self {
        Self { registry, context }
    }

    /// Instantiates the model type registered for the root part's MIME type
    /// and parses the parts into it.
    ///
    /// Unregistered MIME types yield an [`UnknownModel`] carrying the raw
    /// payload instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRootPart`](crate::content::domain::ModelError::MissingRootPart)
    /// when the list has no root, [`ModelError::MalformedPayload`](crate::content::domain::ModelError::MalformedPayload)
    /// when the root body is not a JSON object, and
    /// [`ModelError::Registry`](crate::content::domain::ModelError::Registry)
    /// for lookup failures other than an unknown type.
    pub fn assemble(&self, parts: Vec<ContentPart>) -> ModelResult<Box<dyn ContentModel>> {
        let (root, children) = model::split_root(parts)?;
        let mime_type = root.mime_type().to_owned();

        let mut instance: Box<dyn ContentModel> = match self.registry.get_by_mime_type(&mime_type) {
            Ok(constructor) => constructor.instantiate(self.context.clone()),
            Err(err) if err.is_not_registered() => {
                warn!(
                    mime_type = %mime_type,
                    part_id = %root.id(),
                    "unregistered content type; falling back to unknown-content model"
                );
                Box::new(UnknownModel::with_mime_type(
                    self.context.clone(),
                    mime_type.clone(),
                ))
            }
            Err(err) => return Err(err.into()),
        };

        let mut delivered = Vec::with_capacity(children.len().saturating_add(1));
        delivered.push(root);
        delivered.extend(children);
        model::load(instance.as_mut(), delivered)?;

        debug!(
            type_name = instance.type_name(),
            mime_type = %mime_type,
            part_count = instance.core().child_parts().len().saturating_add(1),
            "assembled message model"
        );
        Ok(instance)
    }

    /// Applies an edit notification to a previously assembled model.
    ///
    /// # Errors
    ///
    /// As for [`model::apply_edit`].
    pub fn apply_edit(
        &self,
        instance: &mut dyn ContentModel,
        parts: Vec<ContentPart>,
    ) -> ModelResult<()> {
        debug!(type_name = instance.type_name(), "applying edit");
        model::apply_edit(instance, parts)
    }
}
