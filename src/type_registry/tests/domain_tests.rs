//! Unit tests for type names, descriptors and lookup errors.

use crate::content::domain::{Role, Schema};
use crate::type_registry::domain::{LookupKey, ModelDescriptor, RegistryError, TypeName};
use rstest::rstest;

#[rstest]
#[case("AudioModel")]
#[case("Text_Model2")]
#[case("x")]
fn valid_type_names_are_accepted(#[case] input: &str) {
    let name = TypeName::new(input).expect("valid name");
    assert_eq!(name.as_str(), input);
}

#[rstest]
fn type_names_are_trimmed_but_keep_case() {
    let name = TypeName::new("  AudioModel ").expect("valid after trim");
    assert_eq!(name.to_string(), "AudioModel");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("2Fast")]
#[case("audio-model")]
#[case("Audio Model")]
#[case("_hidden")]
fn invalid_type_names_are_rejected(#[case] input: &str) {
    let err = TypeName::new(input).expect_err("invalid name");
    assert_eq!(err, RegistryError::InvalidTypeName(input.to_owned()));
}

#[rstest]
fn overly_long_type_names_are_rejected() {
    let input = "A".repeat(101);
    assert!(TypeName::new(input).is_err());
    assert!(TypeName::new("A".repeat(100)).is_ok());
}

static ROLES: [Role; 1] = [Role::SOURCE];

#[rstest]
fn descriptor_defaults_and_builders() {
    let bare = ModelDescriptor::new("PollModel", "application/vnd.example.poll+json", Schema::EMPTY);
    assert!(bare.source_roles().is_empty());
    assert!(bare.child_roles().is_empty());

    let full = bare
        .with_sources(&ROLES)
        .with_child_roles(&ROLES)
        .with_labels("Poll", "Polls")
        .with_summary_template("{{ question }}")
        .with_default_action("open-poll")
        .with_renderers("poll-view", "poll-large-view");

    assert_eq!(full.type_name(), "PollModel");
    assert_eq!(full.mime_type(), "application/vnd.example.poll+json");
    assert_eq!(full.source_roles(), &[Role::SOURCE]);
    assert_eq!(full.label_singular(), "Poll");
    assert_eq!(full.label_plural(), "Polls");
    assert_eq!(full.summary_template(), "{{ question }}");
    assert_eq!(full.default_action(), "open-poll");
    assert_eq!(full.message_renderer(), "poll-view");
    assert_eq!(full.large_message_renderer(), "poll-large-view");
}

#[rstest]
#[case(LookupKey::Name("Poll".to_owned()), "no model type registered for type name 'Poll'")]
#[case(
    LookupKey::MimeType("application/x-poll".to_owned()),
    "no model type registered for MIME type 'application/x-poll'"
)]
fn not_registered_errors_name_their_key(#[case] key: LookupKey, #[case] expected: &str) {
    let err = RegistryError::NotRegistered(key);
    assert!(err.is_not_registered());
    assert_eq!(err.to_string(), expected);
}
