//! Process-wide lookup from type name and MIME type to model constructors.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use tracing::{debug, error};

use crate::content::domain::mime_essence;
use crate::message_types::builtin_constructors;
use crate::type_registry::domain::{
    LookupKey, ModelConstructor, RegistryError, RegistryResult, TypeName,
};

static GLOBAL: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::with_builtin_types);

/// Thread-safe table of registered model types.
///
/// Both lookup maps live behind one lock, so a registration is observed
/// atomically: no reader sees the name updated but not the MIME type.
/// Re-registration replaces the previous constructor; models already
/// instantiated from it are unaffected.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    by_name: HashMap<TypeName, ModelConstructor>,
    by_mime: HashMap<String, ModelConstructor>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in model type.
    ///
    /// Built-in registrations cannot fail on valid names; a failure is
    /// logged and the remaining types are still registered.
    #[must_use]
    pub fn with_builtin_types() -> Self {
        let registry = Self::new();
        for constructor in builtin_constructors() {
            let name = constructor.descriptor().type_name();
            if let Err(err) = registry.register(constructor, name) {
                error!(type_name = name, error = %err, "failed to register built-in type");
            }
        }
        registry
    }

    /// Returns the process-wide registry, pre-populated with the built-in
    /// types on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers a constructor under `name` and its descriptor's MIME type.
    ///
    /// Last write wins for both keys. When `name` was previously registered
    /// with a different MIME type and that MIME key still points at the
    /// replaced registration, the key moves to another name registered under
    /// it (the lowest name, when several are), or is removed when none is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTypeName`] for an invalid name, or
    /// [`RegistryError::LockPoisoned`] when the lock is poisoned.
    pub fn register(&self, constructor: ModelConstructor, name: &str) -> RegistryResult<()> {
        let type_name = TypeName::new(name)?;
        let mime_type = mime_essence(constructor.descriptor().mime_type());

        let mut state = self
            .state
            .write()
            .map_err(|err| RegistryError::LockPoisoned(err.to_string()))?;

        if let Some(previous) = state.by_name.get(&type_name) {
            let stale = mime_essence(previous.descriptor().mime_type());
            let still_indexed = state
                .by_mime
                .get(&stale)
                .is_some_and(|indexed| indexed.descriptor() == previous.descriptor());
            if stale != mime_type && still_indexed {
                let successor = state
                    .by_name
                    .iter()
                    .filter(|(other, registered)| {
                        **other != type_name
                            && mime_essence(registered.descriptor().mime_type()) == stale
                    })
                    .min_by(|(left, _), (right, _)| left.cmp(right))
                    .map(|(other, registered)| (other.clone(), registered.clone()));
                match successor {
                    Some((owner, registered)) => {
                        debug!(
                            type_name = %type_name,
                            mime_type = %stale,
                            owner = %owner,
                            "re-pointed MIME key at its remaining owner"
                        );
                        state.by_mime.insert(stale, registered);
                    }
                    None => {
                        state.by_mime.remove(&stale);
                        debug!(type_name = %type_name, mime_type = %stale, "dropped stale MIME key");
                    }
                }
            }
        }

        debug!(type_name = %type_name, mime_type = %mime_type, "registered model type");
        state.by_mime.insert(mime_type, constructor.clone());
        state.by_name.insert(type_name, constructor);
        Ok(())
    }

    /// Returns the constructor registered under a type name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] when nothing is registered
    /// under `name`, or [`RegistryError::LockPoisoned`].
    pub fn get_by_name(&self, name: &str) -> RegistryResult<ModelConstructor> {
        let not_registered = || RegistryError::NotRegistered(LookupKey::Name(name.to_owned()));
        let Ok(type_name) = TypeName::new(name) else {
            return Err(not_registered());
        };
        let state = self
            .state
            .read()
            .map_err(|err| RegistryError::LockPoisoned(err.to_string()))?;
        state.by_name.get(&type_name).cloned().ok_or_else(not_registered)
    }

    /// Returns the constructor registered for a MIME type.
    ///
    /// Parameters such as `role=...` are ignored and the type is matched
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] for an unknown MIME type, or
    /// [`RegistryError::LockPoisoned`].
    pub fn get_by_mime_type(&self, mime_type: &str) -> RegistryResult<ModelConstructor> {
        let essence = mime_essence(mime_type);
        let state = self
            .state
            .read()
            .map_err(|err| RegistryError::LockPoisoned(err.to_string()))?;
        state
            .by_mime
            .get(&essence)
            .cloned()
            .ok_or(RegistryError::NotRegistered(LookupKey::MimeType(essence)))
    }

    /// Returns every registered type name, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::LockPoisoned`] when the lock is poisoned.
    pub fn names(&self) -> RegistryResult<Vec<TypeName>> {
        let state = self
            .state
            .read()
            .map_err(|err| RegistryError::LockPoisoned(err.to_string()))?;
        let mut names: Vec<_> = state.by_name.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
