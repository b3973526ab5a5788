//! Local binary payloads attached to a model before it is sent.

use std::sync::Arc;

/// An in-memory binary payload with its MIME type and optional file name.
///
/// Cloning a blob shares the underlying bytes.
///
/// # Examples
///
/// ```
/// use tessera::content::domain::Blob;
///
/// let blob = Blob::new("audio/mpeg", vec![0_u8; 2048]).with_name("intro.mp3");
/// assert_eq!(blob.size(), 2048);
/// assert_eq!(blob.name(), Some("intro.mp3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Arc<[u8]>,
    mime_type: String,
    name: Option<String>,
}

impl Blob {
    /// Creates a blob from raw bytes.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::from(data.into()),
            mime_type: mime_type.into(),
            name: None,
        }
    }

    /// Sets the file name the blob was read from.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the file name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.data.len()).unwrap_or(u64::MAX)
    }

    /// Returns `true` when the blob holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
