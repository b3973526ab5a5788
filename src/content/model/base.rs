//! State shared by every model type.

use minijinja::Environment;
use serde_json::Value;
use tokio::sync::broadcast;

use super::{DestroyHandle, ModelContext, ModelState};
use crate::content::domain::{
    Blob, ContentPart, ModelError, ModelResult, PartBody, PartId, PropertyBag, PropertyChange,
    Role,
};
use crate::type_registry::domain::ModelDescriptor;

/// Role to part bindings derived from a model's child part list.
///
/// Never mutated in place: every parse rebuilds it from the current parts,
/// so a binding cannot outlive the part it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleIndex {
    bindings: Vec<(Role, PartId)>,
}

impl RoleIndex {
    /// Binds each role to the first part carrying it; unmatched roles stay
    /// unbound.
    #[must_use]
    pub fn rebuild(roles: &[Role], parts: &[ContentPart]) -> Self {
        let bindings = roles
            .iter()
            .filter_map(|role| {
                parts
                    .iter()
                    .find(|part| part.role() == Some(role))
                    .map(|part| (role.clone(), part.id()))
            })
            .collect();
        Self { bindings }
    }

    /// Returns the part bound to a role.
    #[must_use]
    pub fn get(&self, role: &Role) -> Option<PartId> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == role)
            .map(|(_, id)| *id)
    }
}

/// Base state embedded in every concrete model.
///
/// Holds the root part, the child part arena and its role index, the
/// declared properties, local binary sources awaiting generation, and the
/// change notification channel.
#[derive(Debug)]
pub struct ModelCore {
    descriptor: &'static ModelDescriptor,
    context: ModelContext,
    properties: PropertyBag,
    root: Option<ContentPart>,
    parts: Vec<ContentPart>,
    bindings: RoleIndex,
    sources: Vec<(Role, Blob)>,
    state: ModelState,
    is_edit: bool,
    lifecycle: DestroyHandle,
    changes: broadcast::Sender<PropertyChange>,
}

impl ModelCore {
    /// Creates the state for a fresh local model.
    #[must_use]
    pub fn new(descriptor: &'static ModelDescriptor, context: ModelContext) -> Self {
        let (changes, _) = broadcast::channel(context.config().change_channel_capacity.max(1));
        Self {
            descriptor,
            properties: PropertyBag::new(descriptor.schema()),
            context,
            root: None,
            parts: Vec::new(),
            bindings: RoleIndex::default(),
            sources: Vec::new(),
            state: ModelState::Local,
            is_edit: false,
            lifecycle: DestroyHandle::default(),
            changes,
        }
    }

    /// Returns the type descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    /// Returns the collaborators this model was created with.
    #[must_use]
    pub const fn context(&self) -> &ModelContext {
        &self.context
    }

    /// Returns the declared properties.
    #[must_use]
    pub const fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ModelState {
        self.state
    }

    /// Returns `true` while an edit payload is being parsed.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.is_edit
    }

    /// Returns the root part, once generated or received.
    #[must_use]
    pub const fn part(&self) -> Option<&ContentPart> {
        self.root.as_ref()
    }

    /// Returns the child parts in insertion order.
    #[must_use]
    pub fn child_parts(&self) -> &[ContentPart] {
        &self.parts
    }

    /// Returns the child part currently bound to a role.
    #[must_use]
    pub fn bound(&self, role: &Role) -> Option<&ContentPart> {
        let id = self.bindings.get(role)?;
        self.parts.iter().find(|part| part.id() == id)
    }

    /// Assigns a declared property and broadcasts observable changes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownProperty`] or
    /// [`ModelError::InvalidPropertyValue`] as described on
    /// [`PropertyBag::set`].
    pub fn set_property(&mut self, name: &str, value: impl Into<Value>) -> ModelResult<()> {
        if let Some(change) = self.properties.set(name, value.into())? {
            self.broadcast(change);
        }
        Ok(())
    }

    /// Subscribes to change notifications for observable properties.
    ///
    /// Notifications are delivered asynchronously: the setter that triggers
    /// one returns before any observer sees it.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PropertyChange> {
        self.changes.subscribe()
    }

    /// Attaches a local binary source under a declared source role,
    /// replacing any previous source for that role.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UndeclaredSource`] when the type does not
    /// declare `role` as a binary source.
    pub fn set_source(&mut self, role: Role, blob: Blob) -> ModelResult<()> {
        if !self.descriptor.source_roles().contains(&role) {
            return Err(ModelError::UndeclaredSource(role));
        }
        self.sources.retain(|(existing, _)| *existing != role);
        self.sources.push((role, blob));
        Ok(())
    }

    /// Returns the local source attached under a role.
    #[must_use]
    pub fn source(&self, role: &Role) -> Option<&Blob> {
        self.sources
            .iter()
            .find(|(existing, _)| existing == role)
            .map(|(_, blob)| blob)
    }

    /// Returns the present local sources in declared order.
    #[must_use]
    pub fn pending_sources(&self) -> Vec<(Role, Blob)> {
        self.descriptor
            .source_roles()
            .iter()
            .filter_map(|role| self.source(role).map(|blob| (role.clone(), blob.clone())))
            .collect()
    }

    /// Returns a handle that can destroy this model from elsewhere.
    #[must_use]
    pub fn destroy_handle(&self) -> DestroyHandle {
        self.lifecycle.clone()
    }

    /// Returns `true` once the model has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle.is_destroyed()
    }

    /// Destroys the model and releases every part it owns.
    pub fn destroy(&mut self) {
        self.lifecycle.destroy();
        self.root = None;
        self.parts.clear();
        self.sources.clear();
        self.bindings = RoleIndex::default();
    }

    /// Renders the type's summary template against the current properties,
    /// falling back to the singular label.
    #[must_use]
    pub fn one_line_summary(&self) -> String {
        let template = self.descriptor.summary_template();
        let label = self.descriptor.label_singular();
        if template.is_empty() {
            return label.to_owned();
        }

        match Environment::new().render_str(template, self.properties.values()) {
            Ok(rendered) if !rendered.trim().is_empty() => rendered.trim().to_owned(),
            Ok(_) => label.to_owned(),
            Err(err) => {
                tracing::debug!(
                    type_name = self.descriptor.type_name(),
                    error = %err,
                    "summary template failed to render"
                );
                label.to_owned()
            }
        }
    }

    pub(crate) fn broadcast(&self, change: PropertyChange) {
        if self.changes.send(change).is_err() {
            tracing::trace!(
                type_name = self.descriptor.type_name(),
                "no observers for property change"
            );
        }
    }

    pub(crate) const fn set_edit(&mut self, is_edit: bool) {
        self.is_edit = is_edit;
    }

    pub(crate) const fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    /// Serialises the root part and turns each source into a role-tagged
    /// child, in the order of `sources`.
    pub(crate) fn finish_generation(
        &mut self,
        sources: &[(Role, Blob)],
    ) -> ModelResult<Vec<ContentPart>> {
        let body = serde_json::to_string(&self.properties.to_payload())
            .map_err(|err| ModelError::malformed(err.to_string()))?;
        let root = ContentPart::new(self.descriptor.mime_type(), PartBody::Text(body));
        let root_id = root.id();

        self.parts = sources
            .iter()
            .map(|(role, blob)| {
                ContentPart::from_blob(blob)
                    .with_role(role.clone())
                    .with_parent(root_id)
            })
            .collect();
        self.bindings = RoleIndex::rebuild(self.descriptor.child_roles(), &self.parts);
        self.state = ModelState::Generated;

        let mut output = Vec::with_capacity(self.parts.len().saturating_add(1));
        output.push(root.clone());
        output.extend(self.parts.iter().cloned());
        self.root = Some(root);
        Ok(output)
    }

    pub(crate) fn adopt_root(&mut self, root: ContentPart) {
        self.root = Some(root);
        self.state = ModelState::Received;
    }

    pub(crate) fn replace_root(&mut self, root: ContentPart) {
        self.root = Some(root);
    }

    pub(crate) fn replace_children(&mut self, parts: Vec<ContentPart>) {
        self.parts = parts.into_iter().filter(|part| !part.is_root()).collect();
        self.bindings = RoleIndex::rebuild(self.descriptor.child_roles(), &self.parts);
    }
}
