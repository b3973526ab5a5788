//! The content model engine.
//!
//! A concrete model type embeds a [`ModelCore`] and implements
//! [`ContentModel`] to supply its type-specific steps. The generic pipelines
//! in [`pipeline`] and [`parse`] drive those steps:
//!
//! - [`pipeline::generate_parts`] turns a local model into wire parts
//! - [`parse::load`] and [`parse::apply_edit`] turn wire parts back into a
//!   live model
//! - [`locator::resolve_resource_url`] resolves resource URLs with a fixed
//!   precedence

mod base;
mod context;
mod lifecycle;
pub mod locator;
pub mod parse;
pub mod pipeline;

pub use base::{ModelCore, RoleIndex};
pub use context::ModelContext;
pub use lifecycle::{DestroyHandle, ModelState};
pub use locator::{resolve_resource_url, resolve_resource_url_with};
pub use parse::{apply_edit, load, parse_model_child_parts, parse_model_part, split_root};
pub use pipeline::{Generation, InspectionError, generate_parts, generate_parts_with};

use crate::content::domain::{Blob, Role};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt;

/// Behaviour a model type layers on top of [`ModelCore`].
///
/// Every hook has a default, so a type with no binary sources and no derived
/// fields only implements the accessors.
#[async_trait]
pub trait ContentModel: Send + Sync + fmt::Debug + Any {
    /// Returns the embedded base state.
    fn core(&self) -> &ModelCore;

    /// Returns the embedded base state mutably.
    fn core_mut(&mut self) -> &mut ModelCore;

    /// Inspects one present binary source before the root part is built.
    ///
    /// Runs once per present source, in declared order, never
    /// concurrently. An error is logged by the pipeline and otherwise
    /// treated as if the source had yielded no metadata.
    async fn inspect_source(&mut self, _role: &Role, _blob: &Blob) -> Result<(), InspectionError> {
        Ok(())
    }

    /// Observes the raw root payload after the generic property assignment.
    fn on_model_part(&mut self, _payload: &Map<String, Value>, _is_edit: bool) {}

    /// Fills fields derived from other properties or from child bindings.
    ///
    /// Runs once per load or edit, after the child bindings are rebuilt,
    /// and after any standalone parse stage. Must be idempotent.
    fn resolve_derived(&mut self) {}

    /// Title for a message container.
    fn title_text(&self) -> String {
        self.core().one_line_summary()
    }

    /// Secondary line for a message container.
    fn description(&self) -> String {
        String::new()
    }

    /// Footer line for a message container.
    fn footer(&self) -> String {
        String::new()
    }

    /// Upcasts for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`ContentModel::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn ContentModel + '_ {
    /// Returns the concrete model if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: ContentModel>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns the concrete model mutably if it is a `T`.
    #[must_use]
    pub fn downcast_mut<T: ContentModel>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Returns the registered type name of this instance.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.core().descriptor().type_name()
    }
}
