//! Static per-type metadata.

use crate::content::domain::{Role, Schema};

/// Everything the engine needs to know about a model type besides its
/// behaviour: wire identity, property table, roles, and display metadata.
///
/// Descriptors are declared as `static` items and built with `const`
/// builders:
///
/// ```
/// use tessera::content::domain::{PropertySpec, Role, Schema};
/// use tessera::type_registry::domain::ModelDescriptor;
///
/// static SPECS: [PropertySpec; 1] = [PropertySpec::text("caption")];
/// static ROLES: [Role; 1] = [Role::SOURCE];
/// static PHOTO: ModelDescriptor =
///     ModelDescriptor::new("PhotoModel", "application/vnd.example.photo+json", Schema::new(&SPECS))
///         .with_sources(&ROLES)
///         .with_child_roles(&ROLES)
///         .with_labels("Photo", "Photos");
///
/// assert_eq!(PHOTO.type_name(), "PhotoModel");
/// assert_eq!(PHOTO.source_roles(), &[Role::SOURCE]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    type_name: &'static str,
    mime_type: &'static str,
    schema: Schema,
    source_roles: &'static [Role],
    child_roles: &'static [Role],
    label_singular: &'static str,
    label_plural: &'static str,
    summary_template: &'static str,
    default_action: &'static str,
    message_renderer: &'static str,
    large_message_renderer: &'static str,
}

impl ModelDescriptor {
    /// Creates a descriptor with no roles and empty display metadata.
    #[must_use]
    pub const fn new(type_name: &'static str, mime_type: &'static str, schema: Schema) -> Self {
        Self {
            type_name,
            mime_type,
            schema,
            source_roles: &[],
            child_roles: &[],
            label_singular: "",
            label_plural: "",
            summary_template: "",
            default_action: "",
            message_renderer: "",
            large_message_renderer: "",
        }
    }

    /// Declares the optional binary sources, in inspection and output order.
    #[must_use]
    pub const fn with_sources(mut self, roles: &'static [Role]) -> Self {
        self.source_roles = roles;
        self
    }

    /// Declares the roles bound to child parts on every parse.
    #[must_use]
    pub const fn with_child_roles(mut self, roles: &'static [Role]) -> Self {
        self.child_roles = roles;
        self
    }

    /// Sets the singular and plural display labels.
    #[must_use]
    pub const fn with_labels(mut self, singular: &'static str, plural: &'static str) -> Self {
        self.label_singular = singular;
        self.label_plural = plural;
        self
    }

    /// Sets the template rendered for one-line summaries.
    #[must_use]
    pub const fn with_summary_template(mut self, template: &'static str) -> Self {
        self.summary_template = template;
        self
    }

    /// Sets the action triggered when a rendered message is selected.
    #[must_use]
    pub const fn with_default_action(mut self, action: &'static str) -> Self {
        self.default_action = action;
        self
    }

    /// Sets the renderer component names.
    #[must_use]
    pub const fn with_renderers(mut self, message: &'static str, large_message: &'static str) -> Self {
        self.message_renderer = message;
        self.large_message_renderer = large_message;
        self
    }

    /// Returns the type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the MIME type of the root part.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Returns the property table.
    #[must_use]
    pub const fn schema(&self) -> Schema {
        self.schema
    }

    /// Returns the binary source roles in declaration order.
    #[must_use]
    pub const fn source_roles(&self) -> &'static [Role] {
        self.source_roles
    }

    /// Returns the child roles bound on parse.
    #[must_use]
    pub const fn child_roles(&self) -> &'static [Role] {
        self.child_roles
    }

    /// Returns the singular label.
    #[must_use]
    pub const fn label_singular(&self) -> &'static str {
        self.label_singular
    }

    /// Returns the plural label.
    #[must_use]
    pub const fn label_plural(&self) -> &'static str {
        self.label_plural
    }

    /// Returns the summary template.
    #[must_use]
    pub const fn summary_template(&self) -> &'static str {
        self.summary_template
    }

    /// Returns the default selection action.
    #[must_use]
    pub const fn default_action(&self) -> &'static str {
        self.default_action
    }

    /// Returns the inline renderer name.
    #[must_use]
    pub const fn message_renderer(&self) -> &'static str {
        self.message_renderer
    }

    /// Returns the large-message renderer name.
    #[must_use]
    pub const fn large_message_renderer(&self) -> &'static str {
        self.large_message_renderer
    }
}
