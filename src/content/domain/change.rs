//! Property change notifications.

use serde::Serialize;
use serde_json::Value;

/// Notification emitted when an observable property changes value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyChange {
    /// Name of the property that changed.
    pub property: String,
    /// Value before the change.
    pub old_value: Value,
    /// Value after the change.
    pub new_value: Value,
}

impl PropertyChange {
    /// Creates a change notification.
    #[must_use]
    pub fn new(property: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            property: property.into(),
            old_value,
            new_value,
        }
    }
}
