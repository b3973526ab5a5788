//! Parse pipeline: wire parts to typed properties.
//!
//! [`parse_model_part`] merges a root payload into the declared properties;
//! [`parse_model_child_parts`] rebuilds the role bindings from a fresh child
//! list. [`load`] and [`apply_edit`] run both stages, part first, over a
//! flat part list delivered by a transport.

use serde_json::{Map, Value};
use tracing::debug;

use super::ContentModel;
use crate::content::domain::{ContentPart, ModelError, ModelResult};

/// Merges a root part's JSON body into the model's properties.
///
/// Keys absent from the payload keep their current values, keys the type
/// does not declare are ignored, and `null` resets a property to its
/// default. Observable properties that change are broadcast. Type-specific
/// hooks and derived defaulting run after the generic assignment, against
/// the child bindings already in place.
///
/// # Errors
///
/// Returns [`ModelError::MalformedPayload`] if `body` is not a JSON object,
/// or [`ModelError::InvalidPropertyValue`] if a declared key carries a value
/// of the wrong kind. In the latter case no property is modified.
pub fn parse_model_part<M>(model: &mut M, body: &str) -> ModelResult<()>
where
    M: ContentModel + ?Sized,
{
    merge_root(model, body)?;
    model.resolve_derived();
    Ok(())
}

/// Replaces the model's child parts and recomputes every role binding.
///
/// Each declared child role binds to the first part carrying it; roles with
/// no matching part become unbound. Parts without a role are dropped.
/// Derived defaulting runs once the new bindings are in place.
pub fn parse_model_child_parts<M>(model: &mut M, parts: Vec<ContentPart>)
where
    M: ContentModel + ?Sized,
{
    model.core_mut().replace_children(parts);
    model.resolve_derived();
}

/// Populates a freshly instantiated model from a delivered part list.
///
/// The root is adopted only once its body has been merged, so a malformed
/// body leaves the model untouched.
///
/// # Errors
///
/// Returns [`ModelError::MissingRootPart`] if no part lacks a role, and
/// propagates errors from [`parse_model_part`].
pub fn load<M>(model: &mut M, parts: Vec<ContentPart>) -> ModelResult<()>
where
    M: ContentModel + ?Sized,
{
    let (root, children) = split_root(parts)?;
    let body = root_body(&root)?;
    merge_root(model, &body)?;
    model.core_mut().adopt_root(root);
    parse_model_child_parts(model, children);
    Ok(())
}

/// Applies an edit notification carrying the model's current part list.
///
/// Merges the root body with the edit flag raised, then rebinds the
/// children. Derived defaulting runs once, after the rebinding, so it never
/// reads the bindings of the previous parse. The flag is lowered again even
/// if parsing fails.
///
/// # Errors
///
/// As for [`load`].
pub fn apply_edit<M>(model: &mut M, parts: Vec<ContentPart>) -> ModelResult<()>
where
    M: ContentModel + ?Sized,
{
    let (root, children) = split_root(parts)?;
    let body = root_body(&root)?;

    model.core_mut().set_edit(true);
    let merged = merge_root(model, &body);
    if merged.is_ok() {
        model.core_mut().replace_root(root);
        parse_model_child_parts(model, children);
    }
    model.core_mut().set_edit(false);
    merged
}

/// Splits a delivered part list into the root part and its children.
///
/// The root is the first part without a role. Children are the role-tagged
/// parts whose parent is either unspecified or the root itself.
///
/// # Errors
///
/// Returns [`ModelError::MissingRootPart`] if no part lacks a role.
pub fn split_root(parts: Vec<ContentPart>) -> ModelResult<(ContentPart, Vec<ContentPart>)> {
    let count = parts.len();
    let mut found = None;
    let mut rest = Vec::with_capacity(count);
    for part in parts {
        if found.is_none() && part.is_root() {
            found = Some(part);
        } else {
            rest.push(part);
        }
    }
    let root = found.ok_or(ModelError::MissingRootPart(count))?;

    let root_id = root.id();
    let (children, skipped): (Vec<_>, Vec<_>) = rest.into_iter().partition(|part| {
        !part.is_root() && part.parent_id().is_none_or(|parent| parent == root_id)
    });
    if !skipped.is_empty() {
        debug!(
            part_id = %root_id,
            skipped = skipped.len(),
            "ignoring parts that belong to other nodes"
        );
    }
    Ok((root, children))
}

fn merge_root<M>(model: &mut M, body: &str) -> ModelResult<()>
where
    M: ContentModel + ?Sized,
{
    let payload = decode_object(body)?;
    let changes = model.core_mut().properties_mut().merge_payload(&payload)?;
    for change in changes {
        model.core().broadcast(change);
    }

    let is_edit = model.core().is_edit();
    model.on_model_part(&payload, is_edit);
    Ok(())
}

fn root_body(root: &ContentPart) -> ModelResult<String> {
    root.text().map(str::to_owned).ok_or_else(|| {
        ModelError::malformed(format!(
            "root part {} of type '{}' has no inline text body",
            root.id(),
            root.mime_type()
        ))
    })
}

fn decode_object(body: &str) -> ModelResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(other) => Err(ModelError::malformed(format!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
        Err(err) => Err(ModelError::malformed(err.to_string())),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
