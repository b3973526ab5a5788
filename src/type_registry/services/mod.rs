//! Registry services.

mod registry;

pub use registry::TypeRegistry;
