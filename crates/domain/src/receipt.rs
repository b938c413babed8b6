//! Receipt: the record of one accepted payload.

use std::fmt;

use serde_json::Value;

use crate::payload::Payload;
use crate::time::{self, Timestamp};

/// The configured key, its value in the payload (if any) and when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Key that was looked up.
    pub field: String,
    /// Value found under `field`; `None` when the key is absent.
    pub value: Option<Value>,
    /// When the payload was accepted.
    pub received_at: Timestamp,
}

impl Receipt {
    /// Create a receipt stamped with the current time.
    pub fn new(field: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            field: field.into(),
            value,
            received_at: time::now(),
        }
    }

    /// Read `field` out of `payload`. A missing key is not an error.
    #[must_use]
    pub fn extract(payload: &Payload, field: &str) -> Self {
        Self::new(field, payload.get(field).cloned())
    }

    /// Render the value for logs: strings verbatim, `null` for absent or
    /// JSON null, compact JSON for everything else.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue<'_> {
        DisplayValue(self.value.as_ref())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Received {}: {}", self.field, self.display_value())
    }
}

/// Log-friendly view of an optional JSON value.
pub struct DisplayValue<'a>(Option<&'a Value>);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => f.write_str("null"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}
