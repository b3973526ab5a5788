//! Error types for type registration and lookup.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Key used for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Lookup by type name.
    Name(String),
    /// Lookup by MIME type.
    MimeType(String),
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "type name '{name}'"),
            Self::MimeType(mime) => write!(f, "MIME type '{mime}'"),
        }
    }
}

/// Errors returned by the type registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No constructor is registered under the key.
    #[error("no model type registered for {0}")]
    NotRegistered(LookupKey),

    /// The type name failed validation.
    #[error(
        "type name '{0}' is invalid (must start with a letter and contain only letters, digits, and underscores)"
    )]
    InvalidTypeName(String),

    /// The registry lock was poisoned by a panicking writer.
    #[error("type registry lock poisoned: {0}")]
    LockPoisoned(String),
}

impl RegistryError {
    /// Returns `true` for the recoverable "not found" outcome.
    #[must_use]
    pub const fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered(_))
    }
}
