//! MIME header formatting and parsing for content parts.
//!
//! On the wire a part's structural metadata travels as MIME parameters:
//!
//! ```text
//! image/png; role=preview; parent-node-id=0e5c...
//! ```

use std::fmt;

/// Parameter carrying a child part's role.
pub const ROLE_PARAM: &str = "role";

/// Parameter carrying the identifier of the owning model's root part.
pub const PARENT_PARAM: &str = "parent-node-id";

/// A parsed `type/subtype; key=value` header.
///
/// # Examples
///
/// ```
/// use tessera::content::domain::MimeHeader;
///
/// let header = MimeHeader::parse("Image/PNG; role=preview");
/// assert_eq!(header.essence(), "image/png");
/// assert_eq!(header.param("role"), Some("preview"));
/// assert_eq!(header.to_string(), "image/png; role=preview");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeHeader {
    essence: String,
    params: Vec<(String, String)>,
}

impl MimeHeader {
    /// Creates a header with no parameters.
    #[must_use]
    pub fn new(essence: impl Into<String>) -> Self {
        Self {
            essence: normalise_essence(&essence.into()),
            params: Vec::new(),
        }
    }

    /// Parses a header string.
    ///
    /// Parameters without an `=` are skipped; parameter names are
    /// lowercased, values are kept verbatim.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(';');
        let essence = normalise_essence(segments.next().unwrap_or_default());
        let params = segments
            .filter_map(|segment| segment.split_once('='))
            .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_owned()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { essence, params }
    }

    /// Returns the lowercased `type/subtype`.
    #[must_use]
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// Returns the first value for a parameter name.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Appends a parameter, replacing any existing value for the name.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        let normalised = key.to_ascii_lowercase();
        self.params.retain(|(name, _)| *name != normalised);
        self.params.push((normalised, value.into()));
        self
    }
}

impl fmt::Display for MimeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence)?;
        for (key, value) in &self.params {
            write!(f, "; {key}={value}")?;
        }
        Ok(())
    }
}

/// Returns the lowercased essence of a MIME type, dropping any parameters.
#[must_use]
pub fn mime_essence(raw: &str) -> String {
    normalise_essence(raw.split(';').next().unwrap_or_default())
}

fn normalise_essence(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
