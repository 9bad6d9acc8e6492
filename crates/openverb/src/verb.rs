//! Verb identifiers and the payload shapes exchanged with handlers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OpenVerbError;

/// Input payload handed to a verb handler.
pub type VerbInput = Map<String, Value>;

/// Dotted verb identifier, e.g. `ui.theme.get`.
///
/// An id belongs to a family when it starts with `<family>.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbId(String);

impl VerbId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id lives under `family` (`<family>.` prefix).
    pub fn belongs_to(&self, family: &str) -> bool {
        self.0
            .strip_prefix(family)
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for VerbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VerbId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VerbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VerbId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VerbId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Result of a verb invocation: an open key/value mapping.
///
/// `success` and `error` are the only reserved keys. Presence of `error`
/// signals failure; its absence means the handler's own semantics apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbResult(Map<String, Value>);

impl VerbResult {
    pub const SUCCESS_KEY: &'static str = "success";
    pub const ERROR_KEY: &'static str = "error";

    pub fn new() -> Self {
        Self::default()
    }

    /// `{ "error": message }`
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with(Self::ERROR_KEY, message.into())
    }

    /// `{ "success": false, "error": reason }`, a failure declared by the handler itself.
    pub fn declined(reason: impl Into<String>) -> Self {
        Self::new()
            .with(Self::SUCCESS_KEY, false)
            .with(Self::ERROR_KEY, reason.into())
    }

    /// `{ "success": true }`
    pub fn ok() -> Self {
        Self::new().with(Self::SUCCESS_KEY, true)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn success(&self) -> Option<bool> {
        self.0.get(Self::SUCCESS_KEY).and_then(Value::as_bool)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.0.get(Self::ERROR_KEY).and_then(Value::as_str)
    }

    /// True when the result carries an `error` or an explicit `success: false`.
    pub fn is_failure(&self) -> bool {
        self.0.contains_key(Self::ERROR_KEY) || self.success() == Some(false)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for VerbResult {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for VerbResult {
    type Error = OpenVerbError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(OpenVerbError::InvalidInput(format!(
                "verb result must be an object, got {other}"
            ))),
        }
    }
}

/// Missing keys index to `null`, as with [`Value`].
impl std::ops::Index<&str> for VerbResult {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl PartialEq<Value> for VerbResult {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.0)
    }
}

/// Wire-level invocation request: `{ "verbId": ..., "input": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbRequest {
    pub verb_id: VerbId,
    #[serde(default)]
    pub input: VerbInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verb_id_belongs_only_at_a_dot_boundary() {
        let id = VerbId::from("user.session.get_preferences");
        assert!(id.belongs_to("user.session"));
        assert!(id.belongs_to("user"));
        assert!(!id.belongs_to("user.sess"));
        assert!(!id.belongs_to("user.session.get_preferences"));
    }

    #[test]
    fn declined_result_is_failure_with_reason() {
        let result = VerbResult::declined("logout not configured");
        assert_eq!(result.success(), Some(false));
        assert_eq!(result.error_message(), Some("logout not configured"));
        assert!(result.is_failure());
    }

    #[test]
    fn result_without_reserved_keys_is_not_failure() {
        let result = VerbResult::new().with("mode", "dark");
        assert!(!result.is_failure());
        assert_eq!(result.success(), None);
        assert_eq!(result, json!({"mode": "dark"}));
    }

    #[test]
    fn non_object_value_is_rejected() {
        assert!(VerbResult::try_from(json!([1, 2])).is_err());
        let result = VerbResult::try_from(json!({"total": 3})).expect("object");
        assert_eq!(result.get("total"), Some(&json!(3)));
    }

    #[test]
    fn request_deserializes_camel_case_and_defaults_input() {
        let request: VerbRequest =
            serde_json::from_value(json!({"verbId": "ui.nav.back"})).expect("request");
        assert_eq!(request.verb_id.as_str(), "ui.nav.back");
        assert!(request.input.is_empty());
    }
}
