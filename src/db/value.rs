//! Loosely-typed record access.
//!
//! Rows come back from the backend as JSON objects with no schema known to
//! this tool. `DatabaseValue` renders a single column for display, and
//! `RecordExt` applies it to named fields of a record.

use serde_json::{Map, Value};

/// One row as returned by the backend, in column order.
pub type Record = Map<String, Value>;

/// Display text for a loosely-typed column value.
pub trait DatabaseValue {
    /// Strings as-is, other scalars and containers as compact JSON, `None`
    /// for null.
    fn as_display(&self) -> Option<String>;
}

impl DatabaseValue for Value {
    fn as_display(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Field access on a record with fallbacks for absent or null fields.
pub trait RecordExt {
    /// Display text of `field`, or `default` when absent or null.
    fn get_display_or(&self, field: &str, default: &str) -> String;

    /// The whole record as single-line JSON.
    fn to_compact_string(&self) -> String;
}

impl RecordExt for Record {
    fn get_display_or(&self, field: &str, default: &str) -> String {
        self.get(field)
            .and_then(DatabaseValue::as_display)
            .unwrap_or_else(|| default.to_string())
    }

    fn to_compact_string(&self) -> String {
        Value::Object(self.clone()).to_string()
    }
}
