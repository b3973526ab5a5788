//! Structural roles for child content parts.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Label distinguishing a child part's structural purpose within its model.
///
/// The root part of a model carries no role; every sibling part does.
///
/// # Examples
///
/// ```
/// use tessera::content::domain::Role;
///
/// let role = Role::new(" Preview ");
/// assert_eq!(role, Role::PREVIEW);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// The primary binary payload of a model (audio file, image, ...).
    pub const SOURCE: Self = Self::from_static("source");
    /// A preview image rendered in place of, or alongside, the source.
    pub const PREVIEW: Self = Self::from_static("preview");
    /// A textual transcript of the source.
    pub const TRANSCRIPT: Self = Self::from_static("transcript");

    /// Creates a role from a static label without normalisation.
    #[must_use]
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Creates a role, trimming and lowercasing the label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into().trim().to_ascii_lowercase()))
    }

    /// Returns the role label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
