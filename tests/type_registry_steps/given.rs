//! Given steps for type registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::given;
use tessera::type_registry::services::TypeRegistry;

#[given("a registry with the built-in types")]
fn registry_with_builtins(world: &mut RegistryWorld) {
    world.registry = TypeRegistry::with_builtin_types();
}
