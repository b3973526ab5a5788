//! Addressable content parts.
//!
//! A model's wire form is one root part (JSON body, no role) followed by
//! zero or more sibling parts, each tagged with a [`Role`] and the id of the
//! root it belongs to.

use super::{Blob, MimeHeader, PartId, Role, header};

/// Payload of a content part.
///
/// Large payloads received from a transport are usually [`PartBody::Remote`]
/// and are only resolved on demand through a
/// [`PartFetcher`](crate::content::ports::PartFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    /// Inline UTF-8 text, used for root JSON bodies.
    Text(String),
    /// Inline binary data.
    Binary(Blob),
    /// Content held elsewhere and fetched lazily.
    Remote {
        /// URL already resident on the part, usable without further I/O.
        url: Option<String>,
    },
}

/// A single addressable unit of message content.
///
/// # Examples
///
/// ```
/// use tessera::content::domain::{Blob, ContentPart, PartId, Role};
///
/// let root = PartId::new();
/// let part = ContentPart::from_blob(&Blob::new("image/png", vec![1, 2, 3]))
///     .with_role(Role::PREVIEW)
///     .with_parent(root);
/// assert_eq!(part.size(), Some(3));
/// assert!(part.header().starts_with("image/png; role=preview"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPart {
    id: PartId,
    mime_type: String,
    body: PartBody,
    role: Option<Role>,
    parent_id: Option<PartId>,
    size: Option<u64>,
}

impl ContentPart {
    /// Creates a part with a fresh identifier and no role.
    ///
    /// The size is derived from inline bodies and left unknown for remote
    /// ones.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, body: PartBody) -> Self {
        let size = match &body {
            PartBody::Text(text) => Some(u64::try_from(text.len()).unwrap_or(u64::MAX)),
            PartBody::Binary(blob) => Some(blob.size()),
            PartBody::Remote { .. } => None,
        };
        Self {
            id: PartId::new(),
            mime_type: mime_type.into(),
            body,
            role: None,
            parent_id: None,
            size,
        }
    }

    /// Creates a part carrying a copy of a local blob.
    #[must_use]
    pub fn from_blob(blob: &Blob) -> Self {
        Self::new(blob.mime_type(), PartBody::Binary(blob.clone()))
    }

    /// Creates a part whose body lives elsewhere.
    #[must_use]
    pub fn remote(mime_type: impl Into<String>, url: Option<String>, size: Option<u64>) -> Self {
        let mut part = Self::new(mime_type, PartBody::Remote { url });
        part.size = size;
        part
    }

    /// Reconstructs a part delivered by a transport from its wire header.
    ///
    /// The `role` and `parent-node-id` parameters are lifted out of the
    /// header; an unparseable parent id is treated as absent.
    #[must_use]
    pub fn from_header(id: PartId, raw_header: &str, body: PartBody) -> Self {
        let parsed = MimeHeader::parse(raw_header);
        let mut part = Self::new(parsed.essence(), body);
        part.id = id;
        part.role = parsed.param(header::ROLE_PARAM).map(Role::new);
        part.parent_id = parsed.param(header::PARENT_PARAM).and_then(PartId::parse);
        part
    }

    /// Tags the part with a structural role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Records the root part this part belongs to.
    #[must_use]
    pub const fn with_parent(mut self, parent_id: PartId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Overrides the known size in bytes.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns the part identifier.
    #[must_use]
    pub const fn id(&self) -> PartId {
        self.id
    }

    /// Returns the bare MIME type (no parameters).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &PartBody {
        &self.body
    }

    /// Returns the structural role, or `None` for a root part.
    #[must_use]
    pub const fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Returns the owning root part identifier, if recorded.
    #[must_use]
    pub const fn parent_id(&self) -> Option<PartId> {
        self.parent_id
    }

    /// Returns the size in bytes, if known.
    #[must_use]
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns `true` when the part carries no role.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.role.is_none()
    }

    /// Returns the inline text body, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            PartBody::Text(text) => Some(text),
            PartBody::Binary(_) | PartBody::Remote { .. } => None,
        }
    }

    /// Returns a URL for the body that is available without any I/O.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.body {
            PartBody::Remote { url } => url.as_deref().filter(|url| !url.is_empty()),
            PartBody::Text(_) | PartBody::Binary(_) => None,
        }
    }

    /// Formats the wire header: MIME type plus role and parent parameters.
    #[must_use]
    pub fn header(&self) -> String {
        let mut wire = MimeHeader::new(self.mime_type.as_str());
        if let Some(role) = &self.role {
            wire = wire.with_param(header::ROLE_PARAM, role.as_str());
        }
        if let Some(parent) = self.parent_id {
            wire = wire.with_param(header::PARENT_PARAM, parent.to_string());
        }
        wire.to_string()
    }
}
