//! Coercion of raw request fields into typed values.
//!
//! Request bodies arrive either form-encoded (every value is a string) or
//! as a JSON object (values may already be numbers). Both are normalised
//! into a [`FieldMap`] and read through the helpers below, which accept
//! either representation and produce one human-readable message per
//! offending field.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Raw key/value body of a create or update request.
pub type FieldMap = serde_json::Map<String, Value>;

/// Accumulates per-field messages so a request reports every problem at once.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Record the error side of `result` and return the success side, if any.
    pub fn capture<T>(&mut self, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.messages.push(message);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise a [`CoreError::Validation`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.messages))
        }
    }
}

/// Return one `unknown field` message per key not present in `allowed`.
pub fn unknown_fields(fields: &FieldMap, allowed: &[&str]) -> Vec<String> {
    fields
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| format!("unknown field: {key}"))
        .collect()
}

/// Read an optional text field.
pub fn text_field(fields: &FieldMap, name: &str) -> Result<Option<String>, String> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) => Err(format!("{name} must not be null")),
        Some(_) => Err(format!("{name} must be a string")),
    }
}

/// Read an optional numeric field. Numeric strings are accepted.
///
/// Non-finite values (`NaN`, `inf`) are rejected.
pub fn number_field(fields: &FieldMap, name: &str) -> Result<Option<f64>, String> {
    let parsed = match fields.get(name) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!("{name} must be a number")),
    }
}

/// Read an optional id field. Must be a positive integer; integer strings are accepted.
pub fn id_field(fields: &FieldMap, name: &str) -> Result<Option<DbId>, String> {
    let parsed = match fields.get(name) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<DbId>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(id) if id > 0 => Ok(Some(id)),
        _ => Err(format!("{name} must be a positive integer")),
    }
}

/// Turn an optional value into a required one.
pub fn required<T>(value: Result<Option<T>, String>, name: &str) -> Result<T, String> {
    value?.ok_or_else(|| format!("missing required field: {name}"))
}
