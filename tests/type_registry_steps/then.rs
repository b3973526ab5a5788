//! Then steps for type registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::then;
use tessera::message_types::UnknownModel;

#[then(r#"the lookup resolves to type "{type_name}""#)]
fn lookup_resolves_to(world: &mut RegistryWorld, type_name: String) -> Result<(), eyre::Report> {
    let lookup = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no lookup recorded in scenario world"))?;
    let constructor = lookup
        .as_ref()
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    let resolved = constructor.descriptor().type_name();
    if resolved != type_name {
        return Err(eyre::eyre!("expected type '{type_name}', resolved '{resolved}'"));
    }
    Ok(())
}

#[then(r#"the name "{type_name}" resolves to MIME type "{mime_type}""#)]
fn name_resolves_to_mime(
    world: &mut RegistryWorld,
    type_name: String,
    mime_type: String,
) -> Result<(), eyre::Report> {
    let constructor = world
        .registry
        .get_by_name(&type_name)
        .map_err(|err| eyre::eyre!("lookup by name failed: {err}"))?;
    let resolved = constructor.descriptor().mime_type();
    if resolved != mime_type {
        return Err(eyre::eyre!("expected MIME type '{mime_type}', resolved '{resolved}'"));
    }
    Ok(())
}

#[then(r#"the MIME type "{mime_type}" is not registered"#)]
fn mime_not_registered(world: &mut RegistryWorld, mime_type: String) -> Result<(), eyre::Report> {
    match world.registry.get_by_mime_type(&mime_type) {
        Err(err) if err.is_not_registered() => Ok(()),
        Err(err) => Err(eyre::eyre!("unexpected lookup error: {err}")),
        Ok(constructor) => Err(eyre::eyre!(
            "expected '{mime_type}' to be unregistered, found {constructor:?}"
        )),
    }
}

#[then("the assembled model is the unknown-content model")]
fn assembled_is_unknown(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let model = world
        .assembled
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no assembled model in scenario world"))?;
    let unknown = model
        .downcast_ref::<UnknownModel>()
        .ok_or_else(|| eyre::eyre!("expected unknown model, got {}", model.type_name()))?;
    if unknown.payload().get("question").is_none() {
        return Err(eyre::eyre!("raw payload was not preserved"));
    }
    Ok(())
}
