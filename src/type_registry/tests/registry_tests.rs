//! Unit tests for registration and lookup.

use std::sync::Arc;
use std::thread;

use crate::content::domain::Schema;
use crate::content::model::ModelContext;
use crate::message_types::{
    AUDIO_MIME_TYPE, AUDIO_TYPE_NAME, AudioModel, TEXT_MIME_TYPE, TEXT_TYPE_NAME, TextModel,
};
use crate::type_registry::{
    domain::{LookupKey, ModelConstructor, ModelDescriptor, RegisteredModel, RegistryError},
    services::TypeRegistry,
};
use rstest::{fixture, rstest};

const ALT_AUDIO_MIME_TYPE: &str = "application/vnd.example.audio+json";

static ALT_AUDIO: ModelDescriptor =
    ModelDescriptor::new(AUDIO_TYPE_NAME, ALT_AUDIO_MIME_TYPE, Schema::EMPTY);

fn alternate_audio() -> ModelConstructor {
    ModelConstructor::new(&ALT_AUDIO, |context| Box::new(AudioModel::create(context)))
}

const SHARED_MIME_TYPE: &str = "application/vnd.example.shared+json";

static ALPHA: ModelDescriptor = ModelDescriptor::new("AlphaModel", SHARED_MIME_TYPE, Schema::EMPTY);

static BETA: ModelDescriptor = ModelDescriptor::new("BetaModel", SHARED_MIME_TYPE, Schema::EMPTY);

static BETA_MOVED: ModelDescriptor =
    ModelDescriptor::new("BetaModel", ALT_AUDIO_MIME_TYPE, Schema::EMPTY);

fn constructor_for(descriptor: &'static ModelDescriptor) -> ModelConstructor {
    ModelConstructor::new(descriptor, |context| Box::new(AudioModel::create(context)))
}

#[fixture]
fn registry() -> TypeRegistry {
    TypeRegistry::new()
}

#[rstest]
fn empty_registry_reports_not_registered(registry: TypeRegistry) {
    let by_name = registry.get_by_name("AudioModel").expect_err("empty");
    let by_mime = registry.get_by_mime_type(AUDIO_MIME_TYPE).expect_err("empty");

    assert_eq!(
        by_name,
        RegistryError::NotRegistered(LookupKey::Name("AudioModel".to_owned()))
    );
    assert_eq!(
        by_mime,
        RegistryError::NotRegistered(LookupKey::MimeType(AUDIO_MIME_TYPE.to_owned()))
    );
}

#[rstest]
fn invalid_lookup_name_is_simply_not_registered(registry: TypeRegistry) {
    let err = registry.get_by_name("not a name").expect_err("invalid");
    assert!(err.is_not_registered());
}

#[rstest]
fn registration_indexes_name_and_mime_type(registry: TypeRegistry) {
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("valid registration");

    let by_name = registry.get_by_name(AUDIO_TYPE_NAME).expect("by name");
    let by_mime = registry.get_by_mime_type(AUDIO_MIME_TYPE).expect("by mime");

    assert_eq!(by_name.descriptor(), AudioModel::DESCRIPTOR);
    assert_eq!(by_mime.descriptor(), AudioModel::DESCRIPTOR);
}

#[rstest]
#[case("APPLICATION/VND.LAYER.AUDIO+JSON")]
#[case("application/vnd.layer.audio+json; role=root")]
#[case("  application/vnd.layer.audio+json ")]
fn mime_lookup_ignores_case_and_parameters(registry: TypeRegistry, #[case] mime: &str) {
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("valid registration");
    assert!(registry.get_by_mime_type(mime).is_ok());
}

#[rstest]
fn invalid_registration_name_is_rejected(registry: TypeRegistry) {
    let err = registry
        .register(ModelConstructor::of::<AudioModel>(), "audio model")
        .expect_err("invalid name");
    assert_eq!(err, RegistryError::InvalidTypeName("audio model".to_owned()));
    assert!(registry.get_by_mime_type(AUDIO_MIME_TYPE).is_err());
}

#[rstest]
fn re_registration_replaces_and_drops_stale_mime(registry: TypeRegistry) {
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("first registration");
    registry
        .register(alternate_audio(), AUDIO_TYPE_NAME)
        .expect("second registration");

    let current = registry.get_by_name(AUDIO_TYPE_NAME).expect("by name");
    assert_eq!(current.descriptor().mime_type(), ALT_AUDIO_MIME_TYPE);
    assert!(registry.get_by_mime_type(ALT_AUDIO_MIME_TYPE).is_ok());
    assert!(
        registry
            .get_by_mime_type(AUDIO_MIME_TYPE)
            .expect_err("stale key removed")
            .is_not_registered()
    );
}

#[rstest]
fn stale_mime_shared_with_another_name_is_kept(registry: TypeRegistry) {
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("audio");
    registry
        .register(ModelConstructor::of::<AudioModel>(), "LegacyAudio")
        .expect("second name, same MIME type");
    registry
        .register(alternate_audio(), AUDIO_TYPE_NAME)
        .expect("move audio to the alternate MIME type");

    assert!(registry.get_by_mime_type(AUDIO_MIME_TYPE).is_ok());
    assert!(registry.get_by_mime_type(ALT_AUDIO_MIME_TYPE).is_ok());
    assert!(registry.get_by_name("LegacyAudio").is_ok());
}

#[rstest]
fn shared_stale_mime_moves_to_remaining_owner(registry: TypeRegistry) {
    registry
        .register(constructor_for(&ALPHA), "AlphaModel")
        .expect("alpha");
    registry
        .register(constructor_for(&BETA), "BetaModel")
        .expect("beta takes over the shared MIME type");
    assert_eq!(
        registry
            .get_by_mime_type(SHARED_MIME_TYPE)
            .expect("shared")
            .descriptor(),
        &BETA
    );

    registry
        .register(constructor_for(&BETA_MOVED), "BetaModel")
        .expect("beta moves to another MIME type");

    let shared = registry.get_by_mime_type(SHARED_MIME_TYPE).expect("shared");
    assert_eq!(shared.descriptor(), &ALPHA);
    let moved = registry.get_by_mime_type(ALT_AUDIO_MIME_TYPE).expect("moved");
    assert_eq!(moved.descriptor(), &BETA_MOVED);
}

#[rstest]
fn instances_outlive_re_registration(registry: TypeRegistry) {
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("first registration");
    let constructor = registry.get_by_name(AUDIO_TYPE_NAME).expect("by name");
    let model = constructor.instantiate(ModelContext::detached());

    registry
        .register(alternate_audio(), AUDIO_TYPE_NAME)
        .expect("second registration");

    assert_eq!(model.core().descriptor().mime_type(), AUDIO_MIME_TYPE);
}

#[rstest]
fn names_are_sorted(registry: TypeRegistry) {
    registry
        .register(ModelConstructor::of::<TextModel>(), TEXT_TYPE_NAME)
        .expect("text");
    registry
        .register(ModelConstructor::of::<AudioModel>(), AUDIO_TYPE_NAME)
        .expect("audio");

    let names: Vec<_> = registry
        .names()
        .expect("names")
        .iter()
        .map(|name| name.as_str().to_owned())
        .collect();
    assert_eq!(names, vec![AUDIO_TYPE_NAME, TEXT_TYPE_NAME]);
}

#[rstest]
fn builtin_registry_knows_audio_and_text() {
    let registry = TypeRegistry::with_builtin_types();
    assert!(registry.get_by_mime_type(AUDIO_MIME_TYPE).is_ok());
    assert!(registry.get_by_mime_type(TEXT_MIME_TYPE).is_ok());
    assert!(registry.get_by_name("UnknownModel").is_err());
}

#[rstest]
fn global_registry_is_shared() {
    let first = TypeRegistry::global();
    let second = TypeRegistry::global();
    assert!(std::ptr::eq(first, second));
    assert!(first.get_by_name(AUDIO_TYPE_NAME).is_ok());
}

#[rstest]
fn concurrent_registrations_keep_maps_in_sync() {
    let registry = Arc::new(TypeRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|index| {
            let shared = Arc::clone(&registry);
            thread::spawn(move || {
                let constructor = if index < 4 {
                    ModelConstructor::of::<AudioModel>()
                } else {
                    alternate_audio()
                };
                shared
                    .register(constructor, AUDIO_TYPE_NAME)
                    .expect("valid registration");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("registration thread");
    }

    let current = registry.get_by_name(AUDIO_TYPE_NAME).expect("by name");
    let current_mime = current.descriptor().mime_type();
    assert!(registry.get_by_mime_type(current_mime).is_ok());
    let other = if current_mime == AUDIO_MIME_TYPE {
        ALT_AUDIO_MIME_TYPE
    } else {
        AUDIO_MIME_TYPE
    };
    assert!(registry.get_by_mime_type(other).is_err());
}
