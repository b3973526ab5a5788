//! Domain types for model type registration.

mod constructor;
mod descriptor;
mod error;
mod name;

pub use constructor::{ModelConstructor, ModelFactory, RegisteredModel};
pub use descriptor::ModelDescriptor;
pub use error::{LookupKey, RegistryError, RegistryResult};
pub use name::TypeName;
