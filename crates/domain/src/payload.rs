//! Payload: the JSON body of an inbound webhook.
//!
//! A payload is always a **non-empty JSON object**. Bodies that fail to parse,
//! or that parse to a falsy value (`null`, `false`, `0`, `""`, `[]`, `{}`),
//! are treated as "no payload". An empty object is rejected on purpose: a
//! body with no fields carries nothing to report. Any other value is valid
//! JSON with no fields to read, which is a processing failure rather than a
//! missing payload.

use std::num::FpCategory;

use serde_json::{Map, Value};

use crate::error::{CiHookError, PayloadError, ShapeError};

/// A validated webhook payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse and validate a raw request body.
    ///
    /// # Errors
    ///
    /// Returns [`CiHookError::InvalidPayload`] if the bytes are not JSON or
    /// parse to a falsy value, and [`CiHookError::Unreadable`] for any other
    /// non-object value.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CiHookError> {
        let value: Value = serde_json::from_slice(bytes).map_err(PayloadError::Malformed)?;
        Self::try_from(value)
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TryFrom<Value> for Payload {
    type Error = CiHookError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if is_falsy(&value) {
            return Err(PayloadError::Empty.into());
        }
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ShapeError::NotAnObject {
                kind: kind_of(&other),
            }
            .into()),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
