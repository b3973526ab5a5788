//! When steps for type registry BDD scenarios.

use super::world::RegistryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tessera::content::{
    domain::{ContentPart, PartBody, Schema},
    model::ModelContext,
    services::MessageAssembler,
};
use tessera::message_types::{AUDIO_TYPE_NAME, AudioModel};
use tessera::type_registry::domain::{ModelConstructor, ModelDescriptor, RegisteredModel};

static ALTERNATE_AUDIO: ModelDescriptor = ModelDescriptor::new(
    AUDIO_TYPE_NAME,
    "application/vnd.example.audio+json",
    Schema::EMPTY,
);

#[when(r#"the MIME type "{mime_type}" is looked up"#)]
fn look_up_mime_type(world: &mut RegistryWorld, mime_type: String) {
    world.last_lookup = Some(world.registry.get_by_mime_type(&mime_type));
}

#[when("the audio type is re-registered with an alternate MIME type")]
fn re_register_audio(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let constructor = ModelConstructor::new(&ALTERNATE_AUDIO, |context| {
        Box::new(AudioModel::create(context))
    });
    world
        .registry
        .register(constructor, AUDIO_TYPE_NAME)
        .wrap_err("re-register audio type")?;
    Ok(())
}

#[when(r#"a message with root MIME type "{mime_type}" is assembled"#)]
fn assemble_message(world: &mut RegistryWorld, mime_type: String) -> Result<(), eyre::Report> {
    let root = ContentPart::new(mime_type, PartBody::Text(r#"{"question":"Lunch?"}"#.to_owned()));
    let assembler = MessageAssembler::new(&world.registry, ModelContext::detached());
    let model = assembler.assemble(vec![root]).wrap_err("assemble message")?;
    world.assembled = Some(model);
    Ok(())
}
