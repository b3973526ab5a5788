//! Declarative property schema shared by every model type.
//!
//! Each model type declares a static table of [`PropertySpec`] entries. The
//! generic serialise, parse, and change-broadcast logic consults that table
//! instead of per-type plumbing.

use serde_json::Value;

/// Value kind of a scalar model property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A string; defaults to `""`.
    Text,
    /// A floating point number; defaults to `null`.
    Number,
    /// A non-negative integer; defaults to `0`.
    Count,
    /// A boolean; defaults to `false`.
    Flag,
}

impl PropertyKind {
    /// Returns the value a property of this kind holds when unset.
    #[must_use]
    pub fn default_value(self) -> Value {
        match self {
            Self::Text => Value::String(String::new()),
            Self::Number => Value::Null,
            Self::Count => Value::from(0_u64),
            Self::Flag => Value::Bool(false),
        }
    }

    /// Returns `true` if `value` is acceptable for this kind.
    ///
    /// `null` is accepted by every kind and resets the property.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null)
            | (Self::Text, Value::String(_))
            | (Self::Number, Value::Number(_))
            | (Self::Flag, Value::Bool(_)) => true,
            (Self::Count, Value::Number(number)) => number.is_u64(),
            _ => false,
        }
    }

    /// Returns a human-readable kind name for error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Count => "non-negative integer",
            Self::Flag => "boolean",
        }
    }
}

/// One row of a model type's property table.
///
/// # Examples
///
/// ```
/// use tessera::content::domain::{PropertyKind, PropertySpec};
///
/// const CURRENT_TIME: PropertySpec = PropertySpec::number("current_time").observable().local();
/// assert_eq!(CURRENT_TIME.kind(), PropertyKind::Number);
/// assert!(CURRENT_TIME.is_observable());
/// assert!(!CURRENT_TIME.is_persisted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    name: &'static str,
    kind: PropertyKind,
    observable: bool,
    persisted: bool,
}

impl PropertySpec {
    const fn of(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            observable: false,
            persisted: true,
        }
    }

    /// Declares a text property.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::of(name, PropertyKind::Text)
    }

    /// Declares a numeric property.
    #[must_use]
    pub const fn number(name: &'static str) -> Self {
        Self::of(name, PropertyKind::Number)
    }

    /// Declares a non-negative integer property.
    #[must_use]
    pub const fn count(name: &'static str) -> Self {
        Self::of(name, PropertyKind::Count)
    }

    /// Declares a boolean property.
    #[must_use]
    pub const fn flag(name: &'static str) -> Self {
        Self::of(name, PropertyKind::Flag)
    }

    /// Broadcasts a change notification whenever the value changes.
    #[must_use]
    pub const fn observable(mut self) -> Self {
        self.observable = true;
        self
    }

    /// Keeps the property out of the serialised root body.
    #[must_use]
    pub const fn local(mut self) -> Self {
        self.persisted = false;
        self
    }

    /// Returns the property name, which is also its wire key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value kind.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns `true` if changes are broadcast to observers.
    #[must_use]
    pub const fn is_observable(&self) -> bool {
        self.observable
    }

    /// Returns `true` if the property is written to the root body.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Returns `true` if `value` equals this property's default.
    #[must_use]
    pub fn is_default(&self, value: &Value) -> bool {
        value.is_null() || *value == self.kind.default_value()
    }
}

/// A model type's complete, ordered property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    specs: &'static [PropertySpec],
}

impl Schema {
    /// A schema declaring no properties.
    pub const EMPTY: Self = Self::new(&[]);

    /// Wraps a static property table.
    #[must_use]
    pub const fn new(specs: &'static [PropertySpec]) -> Self {
        Self { specs }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static PropertySpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Iterates the properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PropertySpec> {
        self.specs.iter()
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` when no properties are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
