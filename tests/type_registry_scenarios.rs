//! Behaviour tests for model type registration and lookup.

mod type_registry_steps;

use rstest_bdd_macros::scenario;
use type_registry_steps::world::{RegistryWorld, world};

#[scenario(
    path = "tests/features/type_registry.feature",
    name = "Resolve a built-in type by MIME type"
)]
fn resolve_builtin_by_mime(world: RegistryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/type_registry.feature",
    name = "Re-registration replaces the constructor"
)]
fn re_registration_replaces(world: RegistryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/type_registry.feature",
    name = "Unknown MIME types fall back to the unknown-content model"
)]
fn unknown_mime_falls_back(world: RegistryWorld) {
    let _ = world;
}
