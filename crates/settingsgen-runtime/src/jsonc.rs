//! JSON with comments.
//!
//! Settings files may carry `//` line comments and `/* */` block comments.
//! Both the generator and generated code parse them through [`parse`], so
//! the two sides always see the same tree.

use serde::Deserialize;
use serde_json::Value;

/// Error produced while reading a commented JSON document.
#[derive(Debug, thiserror::Error)]
pub enum JsoncError {
    #[error(transparent)]
    Json(#[from] serde_json_lenient::Error),
}

/// Parse commented JSON text into an untyped document.
///
/// A leading byte-order mark is ignored. Key order is kept.
pub fn parse(text: &str) -> Result<Value, JsoncError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut deserializer = serde_json_lenient::Deserializer::from_str(text);
    deserializer.set_allow_comments(true);
    let value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}
