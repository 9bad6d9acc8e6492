//! Minimal JSON Schema checks for verb payloads.

use serde_json::Value;

use crate::error::{OpenVerbError, Result};

/// Validate a JSON value against a minimal JSON Schema subset.
///
/// Supports: `type` (a name or a list of names), `required`, `enum` and
/// `properties` (recursive). An empty schema `{}` passes anything.
pub fn validate_schema(value: &Value, schema: &Value) -> Result<()> {
    validate_at(value, schema, "$")
}

fn validate_at(value: &Value, schema: &Value, path: &str) -> Result<()> {
    let schema_obj = match schema.as_object() {
        Some(obj) if !obj.is_empty() => obj,
        _ => return Ok(()),
    };

    if let Some(type_val) = schema_obj.get("type") {
        let allowed: Vec<&str> = match type_val {
            Value::String(name) => vec![name.as_str()],
            Value::Array(names) => names.iter().filter_map(Value::as_str).collect(),
            _ => {
                return Err(OpenVerbError::Schema(format!(
                    "{path}: schema 'type' must be a string or a list of strings"
                )))
            }
        };

        let mut matched = false;
        for type_name in &allowed {
            if type_matches(value, type_name, path)? {
                matched = true;
                break;
            }
        }
        if !matched {
            return Err(OpenVerbError::Schema(format!(
                "{path}: expected type '{}', got {}",
                allowed.join("|"),
                json_type_name(value)
            )));
        }
    }

    if let Some(Value::Array(options)) = schema_obj.get("enum") {
        if !options.contains(value) {
            return Err(OpenVerbError::Schema(format!(
                "{path}: value {value} is not one of the allowed values"
            )));
        }
    }

    if let (Some(Value::Array(required)), Some(obj)) =
        (schema_obj.get("required"), value.as_object())
    {
        for key in required.iter().filter_map(Value::as_str) {
            if !obj.contains_key(key) {
                return Err(OpenVerbError::Schema(format!(
                    "{path}: missing required field '{key}'"
                )));
            }
        }
    }

    if let (Some(Value::Object(properties)), Some(obj)) =
        (schema_obj.get("properties"), value.as_object())
    {
        for (key, prop_schema) in properties {
            if let Some(prop_value) = obj.get(key) {
                validate_at(prop_value, prop_schema, &format!("{path}.{key}"))?;
            }
        }
    }

    Ok(())
}

fn type_matches(value: &Value, type_name: &str, path: &str) -> Result<bool> {
    Ok(match type_name {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        other => {
            return Err(OpenVerbError::Schema(format!(
                "{path}: unknown schema type: {other}"
            )))
        }
    })
}

/// Returns a human-readable name for the JSON type of a value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
