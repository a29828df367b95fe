//! Declared types for leaf values.
//!
//! Inference is shallow: numbers are integers, arrays take the
//! type of their first element, and everything unrecognised is a string.

use crate::ir::ScalarType;
use serde_json::Value;

/// Declared type for a leaf JSON value.
pub fn infer_type(value: &Value) -> ScalarType {
    match value {
        Value::Array(items) => ScalarType::Sequence(Box::new(
            items.first().map(element_type).unwrap_or(ScalarType::String),
        )),
        other => element_type(other),
    }
}

// Arrays nested inside arrays are not modelled; they fall back to string.
fn element_type(value: &Value) -> ScalarType {
    match value {
        Value::Number(_) => ScalarType::Integer,
        Value::Bool(_) => ScalarType::Boolean,
        _ => ScalarType::String,
    }
}
