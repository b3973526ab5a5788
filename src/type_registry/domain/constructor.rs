//! Model constructors stored in the registry.

use super::ModelDescriptor;
use crate::content::model::{ContentModel, ModelContext};
use std::fmt;
use std::sync::Arc;

/// Factory closure producing a fresh model instance.
pub type ModelFactory = Arc<dyn Fn(ModelContext) -> Box<dyn ContentModel> + Send + Sync>;

/// A model type implemented in Rust and registrable by type.
pub trait RegisteredModel: ContentModel + Sized + 'static {
    /// Static metadata for the type.
    const DESCRIPTOR: &'static ModelDescriptor;

    /// Creates an empty local instance.
    fn create(context: ModelContext) -> Self;
}

/// Descriptor plus factory: everything needed to instantiate a model type.
#[derive(Clone)]
pub struct ModelConstructor {
    descriptor: &'static ModelDescriptor,
    factory: ModelFactory,
}

impl ModelConstructor {
    /// Creates a constructor from a descriptor and factory closure.
    #[must_use]
    pub fn new<F>(descriptor: &'static ModelDescriptor, factory: F) -> Self
    where
        F: Fn(ModelContext) -> Box<dyn ContentModel> + Send + Sync + 'static,
    {
        Self {
            descriptor,
            factory: Arc::new(factory),
        }
    }

    /// Creates the constructor for a [`RegisteredModel`] type.
    #[must_use]
    pub fn of<T: RegisteredModel>() -> Self {
        Self::new(T::DESCRIPTOR, |context| Box::new(T::create(context)))
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    /// Instantiates a new model.
    #[must_use]
    pub fn instantiate(&self, context: ModelContext) -> Box<dyn ContentModel> {
        (self.factory)(context)
    }
}

impl fmt::Debug for ModelConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConstructor")
            .field("type_name", &self.descriptor.type_name())
            .field("mime_type", &self.descriptor.mime_type())
            .finish_non_exhaustive()
    }
}
