//! Built-in model types registered in the process-wide registry.

use super::{AudioModel, TextModel};
use crate::type_registry::domain::ModelConstructor;

/// Returns the constructors of every built-in registrable type.
#[must_use]
pub fn builtin_constructors() -> Vec<ModelConstructor> {
    vec![
        ModelConstructor::of::<AudioModel>(),
        ModelConstructor::of::<TextModel>(),
    ]
}
