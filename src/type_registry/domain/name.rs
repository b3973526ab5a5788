//! Validated model type name.

use super::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a type name.
const MAX_NAME_LENGTH: usize = 100;

/// Name under which a model type is registered (e.g. `AudioModel`).
///
/// Names start with an ASCII letter and otherwise contain only ASCII
/// alphanumerics and underscores. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a validated type name from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTypeName`] when the value is empty,
    /// longer than 100 characters, does not start with a letter, or contains
    /// characters outside `[A-Za-z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = value.into();
        let trimmed = raw.trim();

        let starts_with_letter = trimmed
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        let is_valid = starts_with_letter
            && trimmed.len() <= MAX_NAME_LENGTH
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !is_valid {
            return Err(RegistryError::InvalidTypeName(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
