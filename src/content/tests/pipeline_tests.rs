//! Unit tests for the generation pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::fixtures::{ClipModel, CLIP_MIME_TYPE, audio_blob, context_with, image_blob};
use crate::config::PipelineConfig;
use crate::content::{
    adapters::memory::{InMemoryPartFetcher, ProbeCall, StaticMediaProbe},
    domain::{ModelError, Role},
    model::{
        ContentModel, Generation, ModelContext, ModelState, generate_parts, generate_parts_with,
    },
};
use rstest::rstest;
use serde_json::{Value, json};

fn full_probe() -> StaticMediaProbe {
    StaticMediaProbe::new()
        .with_audio_duration(42.0)
        .with_image_dimensions(640, 480)
}

async fn generate(model: &mut ClipModel) -> Vec<crate::content::domain::ContentPart> {
    match generate_parts(model).await.expect("generation succeeds") {
        Generation::Ready(parts) => parts,
        Generation::Abandoned => panic!("generation was abandoned"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn root_part_carries_non_default_properties() {
    let mut model = ClipModel::new(ModelContext::detached());
    model
        .core_mut()
        .set_property("title", "Morning")
        .expect("title accepted");

    let parts = generate(&mut model).await;

    assert_eq!(parts.len(), 1);
    let root = parts.first().expect("root part");
    assert!(root.is_root());
    assert_eq!(root.mime_type(), CLIP_MIME_TYPE);
    let body: Value = serde_json::from_str(root.text().expect("inline body")).expect("json");
    assert_eq!(body, json!({ "title": "Morning" }));
    assert_eq!(model.core().state(), ModelState::Generated);
    assert_eq!(model.core().part(), Some(root));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn children_follow_root_in_declared_order() {
    let probe = full_probe()
        .with_audio_delay(Duration::from_millis(40))
        .with_image_delay(Duration::from_millis(1));
    let mut model = ClipModel::new(context_with(probe.clone(), InMemoryPartFetcher::new()));
    model
        .core_mut()
        .set_source(Role::PREVIEW, image_blob())
        .expect("preview declared");
    model
        .core_mut()
        .set_source(Role::SOURCE, audio_blob())
        .expect("source declared");

    let parts = generate(&mut model).await;

    let roles: Vec<_> = parts.iter().map(|part| part.role().cloned()).collect();
    assert_eq!(roles, vec![None, Some(Role::SOURCE), Some(Role::PREVIEW)]);
    assert_eq!(model.inspected, vec![Role::SOURCE, Role::PREVIEW]);
    assert_eq!(
        probe.calls().expect("calls recorded"),
        vec![
            ProbeCall::Audio("audio/mpeg".to_owned()),
            ProbeCall::Image("image/png".to_owned()),
        ]
    );

    let root_id = parts.first().expect("root part").id();
    assert!(parts.iter().skip(1).all(|part| part.parent_id() == Some(root_id)));
    assert_eq!(model.core().child_parts().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inspection_results_reach_the_root_body() {
    let mut model = ClipModel::new(context_with(full_probe(), InMemoryPartFetcher::new()));
    model
        .core_mut()
        .set_source(Role::SOURCE, audio_blob())
        .expect("source declared");
    model
        .core_mut()
        .set_source(Role::PREVIEW, image_blob())
        .expect("preview declared");

    let parts = generate(&mut model).await;

    let body: Value =
        serde_json::from_str(parts.first().and_then(|p| p.text()).expect("root body"))
            .expect("json");
    assert_eq!(body, json!({ "length": 42.0, "width": 640 }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn absent_source_is_skipped_without_inspection() {
    let mut model = ClipModel::new(context_with(full_probe(), InMemoryPartFetcher::new()));
    model
        .core_mut()
        .set_source(Role::PREVIEW, image_blob())
        .expect("preview declared");

    let parts = generate(&mut model).await;

    assert_eq!(model.inspected, vec![Role::PREVIEW]);
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|part| part.role() != Some(&Role::SOURCE)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_inspection_leaves_property_unset() {
    let probe = StaticMediaProbe::new().with_image_dimensions(10, 20);
    let mut model = ClipModel::new(context_with(probe, InMemoryPartFetcher::new()));
    model
        .core_mut()
        .set_source(Role::SOURCE, audio_blob())
        .expect("source declared");
    model
        .core_mut()
        .set_source(Role::PREVIEW, image_blob())
        .expect("preview declared");

    let parts = generate(&mut model).await;

    assert_eq!(parts.len(), 3);
    assert_eq!(model.core().properties().number("length"), None);
    assert_eq!(model.core().properties().count("width"), 10);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timed_out_inspection_is_not_fatal() {
    let probe = full_probe().with_audio_delay(Duration::from_secs(5));
    let config = PipelineConfig::default().with_inspection_timeout(Some(Duration::from_millis(20)));
    let context = ModelContext::new(Arc::new(probe), Arc::new(InMemoryPartFetcher::new()))
        .with_config(config);
    let mut model = ClipModel::new(context);
    model
        .core_mut()
        .set_source(Role::SOURCE, audio_blob())
        .expect("source declared");

    let parts = generate(&mut model).await;

    assert_eq!(parts.len(), 2);
    assert_eq!(model.core().properties().number("length"), None);
}

#[rstest]
fn undeclared_source_role_is_rejected() {
    let mut model = ClipModel::new(ModelContext::detached());
    let err = model
        .core_mut()
        .set_source(Role::TRANSCRIPT, audio_blob())
        .expect_err("transcript is not a binary source");
    assert!(matches!(err, ModelError::UndeclaredSource(role) if role == Role::TRANSCRIPT));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn destroyed_model_abandons_generation() {
    let mut model = ClipModel::new(context_with(full_probe(), InMemoryPartFetcher::new()));
    model
        .core_mut()
        .set_source(Role::SOURCE, audio_blob())
        .expect("source declared");
    model.core().destroy_handle().destroy();

    let outcome = generate_parts(&mut model).await.expect("no error");

    assert_eq!(outcome, Generation::Abandoned);
    assert!(model.inspected.is_empty());
    assert_eq!(model.core().part(), None);
    assert_eq!(model.core().state(), ModelState::Local);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn callback_fires_once_with_parts() {
    let mut model = ClipModel::new(ModelContext::detached());
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    generate_parts_with(&mut model, move |parts| {
        assert_eq!(parts.len(), 1);
        assert!(!flag.swap(true, Ordering::SeqCst), "callback fired twice");
    })
    .await
    .expect("generation succeeds");

    assert!(fired.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn callback_never_fires_for_destroyed_model() {
    let mut model = ClipModel::new(ModelContext::detached());
    model.core_mut().destroy();
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    generate_parts_with(&mut model, move |_| flag.store(true, Ordering::SeqCst))
        .await
        .expect("no error");

    assert!(!fired.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn observable_changes_are_broadcast_after_the_setter_returns() {
    let mut model = ClipModel::new(ModelContext::detached());
    let mut changes = model.core().subscribe();

    model
        .core_mut()
        .set_property("position", 1.5)
        .expect("position accepted");
    model
        .core_mut()
        .set_property("title", "not observable")
        .expect("title accepted");

    let change = changes.recv().await.expect("change delivered");
    assert_eq!(change.property, "position");
    assert_eq!(change.old_value, Value::Null);
    assert_eq!(change.new_value, json!(1.5));
    assert!(changes.try_recv().is_err());
}

#[rstest]
fn summary_renders_template_with_label_fallback() {
    let mut model = ClipModel::new(ModelContext::detached());
    assert_eq!(model.core().one_line_summary(), "Clip");

    model
        .core_mut()
        .set_property("title", "Sunrise")
        .expect("title accepted");
    assert_eq!(model.core().one_line_summary(), "Sunrise");
    assert_eq!(model.title_text(), "Sunrise");
}
