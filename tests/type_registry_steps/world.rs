//! Shared world state for type registry BDD scenarios.

use rstest::fixture;
use tessera::content::model::ContentModel;
use tessera::type_registry::{
    domain::{ModelConstructor, RegistryResult},
    services::TypeRegistry,
};

/// Scenario world for type registry behaviour tests.
pub struct RegistryWorld {
    /// The registry under test.
    pub registry: TypeRegistry,
    /// Result of the last lookup.
    pub last_lookup: Option<RegistryResult<ModelConstructor>>,
    /// Model produced by the last assembly.
    pub assembled: Option<Box<dyn ContentModel>>,
}

impl RegistryWorld {
    /// Creates a world around an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            last_lookup: None,
            assembled: None,
        }
    }
}

impl Default for RegistryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}
