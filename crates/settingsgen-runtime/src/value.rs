//! Conversions from untyped JSON values into the types generated code declares.

use crate::Error;
use serde_json::Value;

/// A type a settings field can be declared as.
///
/// Implemented for the declared types `i64`, `bool`, `String` and `Vec<T>`.
pub trait FromValue: Sized {
    /// Convert `value`, found at the dotted `path`, into `Self`.
    fn from_value(value: &Value, path: &str) -> Result<Self, Error>;
}

impl FromValue for i64 {
    fn from_value(value: &Value, path: &str) -> Result<Self, Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                // Fractional values truncate toward zero; integers and floats are not distinguished.
                .or_else(|| n.as_f64().and_then(truncate))
                .ok_or_else(|| Error::mismatch(path, "integer", value)),
            _ => Err(Error::mismatch(path, "integer", value)),
        }
    }
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn truncate(f: f64) -> Option<i64> {
    let f = f.trunc();
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

impl FromValue for bool {
    fn from_value(value: &Value, path: &str) -> Result<Self, Error> {
        value
            .as_bool()
            .ok_or_else(|| Error::mismatch(path, "boolean", value))
    }
}

/// Stringify: strings are taken verbatim, `null` becomes empty, anything
/// else is rendered as compact JSON text.
impl FromValue for String {
    fn from_value(value: &Value, _path: &str) -> Result<Self, Error> {
        Ok(match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value, path: &str) -> Result<Self, Error> {
        let items = value
            .as_array()
            .ok_or_else(|| Error::mismatch(path, "array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_value(item, &format!("{path}[{index}]")))
            .collect()
    }
}

/// Name of a JSON value's kind, as used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_accept_whole_and_fractional_numbers() {
        assert_eq!(i64::from_value(&json!(42), "A").unwrap(), 42);
        assert_eq!(i64::from_value(&json!(-7), "A").unwrap(), -7);
        assert_eq!(i64::from_value(&json!(2.9), "A").unwrap(), 2);
    }

    #[test]
    fn integers_out_of_range_are_rejected() {
        let big: Value = serde_json::from_str("9223372036854775808").unwrap();
        assert!(matches!(
            i64::from_value(&big, "Big"),
            Err(Error::Mismatch { ref path, .. }) if path == "Big"
        ));
        assert!(i64::from_value(&json!(1e300), "Huge").is_err());
        assert!(i64::from_value(&json!(-1e300), "Huge").is_err());
        assert_eq!(i64::from_value(&json!(i64::MIN), "A").unwrap(), i64::MIN);
        assert_eq!(i64::from_value(&json!(i64::MAX), "A").unwrap(), i64::MAX);
        assert_eq!(i64::from_value(&json!(-2.5), "A").unwrap(), -2);
    }

    #[test]
    fn integer_mismatch_names_the_path() {
        let err = i64::from_value(&json!("3"), "Retry").unwrap_err();
        assert_eq!(
            err.to_string(),
            "field `Retry` expected integer, found string"
        );
    }

    #[test]
    fn strings_stringify_other_kinds() {
        assert_eq!(String::from_value(&json!("x"), "A").unwrap(), "x");
        assert_eq!(String::from_value(&json!(null), "A").unwrap(), "");
        assert_eq!(String::from_value(&json!(5), "A").unwrap(), "5");
        assert_eq!(String::from_value(&json!({"k": 1}), "A").unwrap(), r#"{"k":1}"#);
    }

    #[test]
    fn sequences_convert_each_element() {
        let value = json!([1, 2, 3]);
        assert_eq!(Vec::<i64>::from_value(&value, "A").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn sequence_errors_point_at_the_element() {
        let err = Vec::<i64>::from_value(&json!([1, "two"]), "Ports").unwrap_err();
        assert!(matches!(err, Error::Mismatch { ref path, .. } if path == "Ports[1]"));
    }

    #[test]
    fn booleans_are_strict() {
        assert!(bool::from_value(&json!(true), "A").unwrap());
        assert!(bool::from_value(&json!(1), "A").is_err());
    }
}
