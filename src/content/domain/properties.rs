//! Schema-checked storage for a model's scalar properties.

use serde_json::{Map, Value};

use super::{ModelError, ModelResult, PropertyChange, PropertySpec, Schema};

/// Values of a model's declared scalar properties.
///
/// Only non-default values are stored, so the bag doubles as the
/// serialised root body.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tessera::content::domain::{PropertyBag, PropertySpec, Schema};
///
/// static SPECS: [PropertySpec; 2] = [PropertySpec::text("title"), PropertySpec::count("size")];
///
/// let mut bag = PropertyBag::new(Schema::new(&SPECS));
/// bag.set("title", json!("Out of Tunes")).expect("declared text property");
/// bag.set("size", json!(0)).expect("declared count property");
/// assert_eq!(bag.to_payload().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBag {
    schema: Schema,
    values: Map<String, Value>,
}

impl PropertyBag {
    /// Creates an empty bag for a schema.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: Map::new(),
        }
    }

    /// Returns the schema backing this bag.
    #[must_use]
    pub const fn schema(&self) -> Schema {
        self.schema
    }

    /// Returns the stored value of a property, or `None` when it holds its
    /// default.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns a text property, or `""` when unset.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.values
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns a numeric property, or `None` when unset.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_f64)
    }

    /// Returns a count property, or `0` when unset.
    #[must_use]
    pub fn count(&self, name: &str) -> u64 {
        self.values
            .get(name)
            .and_then(Value::as_u64)
            .unwrap_or_default()
    }

    /// Returns a boolean property, or `false` when unset.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or_default()
    }

    /// Assigns a property.
    ///
    /// Returns the change notification to broadcast when the property is
    /// observable and its value actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownProperty`] for undeclared names and
    /// [`ModelError::InvalidPropertyValue`] when the value does not match the
    /// declared kind.
    pub fn set(&mut self, name: &str, value: Value) -> ModelResult<Option<PropertyChange>> {
        let spec = self.checked_spec(name, &value)?;
        Ok(self.assign(spec, value))
    }

    /// Applies a root-body payload.
    ///
    /// Keys present in the payload overwrite their properties; absent keys
    /// are left untouched. Keys not declared in the schema are ignored. The
    /// whole payload is validated before anything is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidPropertyValue`] when a declared key holds
    /// a value of the wrong kind; no property is modified in that case.
    pub fn merge_payload(&mut self, payload: &Map<String, Value>) -> ModelResult<Vec<PropertyChange>> {
        let mut accepted = Vec::with_capacity(payload.len());
        for (key, value) in payload {
            let Some(spec) = self.schema.get(key) else {
                tracing::trace!(property = %key, "ignoring undeclared property in payload");
                continue;
            };
            if !spec.kind().accepts(value) {
                return Err(ModelError::invalid_value(spec));
            }
            accepted.push((spec, value.clone()));
        }

        Ok(accepted
            .into_iter()
            .filter_map(|(spec, value)| self.assign(spec, value))
            .collect())
    }

    /// Serialises the persisted, non-default properties.
    #[must_use]
    pub fn to_payload(&self) -> Map<String, Value> {
        self.schema
            .iter()
            .filter(|spec| spec.is_persisted())
            .filter_map(|spec| {
                self.values
                    .get(spec.name())
                    .map(|value| (spec.name().to_owned(), value.clone()))
            })
            .collect()
    }

    /// Returns every stored value, persisted or not.
    #[must_use]
    pub const fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    fn checked_spec(&self, name: &str, value: &Value) -> ModelResult<&'static PropertySpec> {
        let spec = self
            .schema
            .get(name)
            .ok_or_else(|| ModelError::UnknownProperty(name.to_owned()))?;
        if spec.kind().accepts(value) {
            Ok(spec)
        } else {
            Err(ModelError::invalid_value(spec))
        }
    }

    fn assign(&mut self, spec: &PropertySpec, value: Value) -> Option<PropertyChange> {
        let old_value = self
            .values
            .get(spec.name())
            .cloned()
            .unwrap_or_else(|| spec.kind().default_value());
        let new_value = if value.is_null() {
            spec.kind().default_value()
        } else {
            value
        };
        if old_value == new_value {
            return None;
        }

        if spec.is_default(&new_value) {
            self.values.remove(spec.name());
        } else {
            self.values
                .insert(spec.name().to_owned(), new_value.clone());
        }

        spec.is_observable()
            .then(|| PropertyChange::new(spec.name(), old_value, new_value))
    }
}
