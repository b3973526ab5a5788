//! Concrete message types.
//!
//! Each type declares its property schema, binary sources and child roles
//! in a static [`ModelDescriptor`](crate::type_registry::domain::ModelDescriptor)
//! and layers its derived accessors on the shared model engine.

mod audio;
mod builtin;
mod text;
mod unknown;

pub use audio::{AUDIO_MIME_TYPE, AUDIO_TYPE_NAME, AudioModel};
pub use builtin::builtin_constructors;
pub use text::{TEXT_MIME_TYPE, TEXT_TYPE_NAME, TextModel};
pub use unknown::{UNKNOWN_MIME_TYPE, UnknownModel};

#[cfg(test)]
mod tests;
