//! Error types for model construction, parsing, and sending.

use super::{PropertySpec, Role};
use crate::content::ports::PartTransportError;
use crate::type_registry::domain::RegistryError;
use thiserror::Error;

/// Result type for content model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced by the content model engine.
///
/// Inspection failures are deliberately absent: they are logged by the
/// generation pipeline and never reach the caller.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The root body is not a JSON object.
    #[error("malformed model payload: {0}")]
    MalformedPayload(String),

    /// A property value does not match its declared kind.
    #[error("property '{property}' expects a {expected} value")]
    InvalidPropertyValue {
        /// The property name.
        property: String,
        /// The declared kind.
        expected: &'static str,
    },

    /// A setter named a property the model type does not declare.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A binary source was attached under a role the model does not declare.
    #[error("role '{0}' is not a declared binary source")]
    UndeclaredSource(Role),

    /// No role-less part was found among a message's parts.
    #[error("no root part among {0} message parts")]
    MissingRootPart(usize),

    /// Type lookup failed for a reason other than an unknown type.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The transport refused the generated parts.
    #[error(transparent)]
    Transport(#[from] PartTransportError),
}

impl ModelError {
    /// Creates a malformed payload error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }

    /// Creates an invalid value error for a property.
    #[must_use]
    pub fn invalid_value(spec: &PropertySpec) -> Self {
        Self::InvalidPropertyValue {
            property: spec.name().to_owned(),
            expected: spec.kind().name(),
        }
    }
}
