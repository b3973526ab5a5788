//! Domain types for the content model engine.
//!
//! Pure value types with no I/O: parts, blobs, roles, MIME headers, the
//! declarative property schema, and the errors raised while handling them.

mod blob;
mod change;
mod error;
pub mod header;
mod ids;
mod part;
mod properties;
mod role;
mod schema;

pub use blob::Blob;
pub use change::PropertyChange;
pub use error::{ModelError, ModelResult};
pub use header::{MimeHeader, mime_essence};
pub use ids::PartId;
pub use part::{ContentPart, PartBody};
pub use properties::PropertyBag;
pub use role::Role;
pub use schema::{PropertyKind, PropertySpec, Schema};
