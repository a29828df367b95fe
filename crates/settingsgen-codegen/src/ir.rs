//! Schema tree inferred from a settings document.
//!
//! The loader turns the JSON text into this tree once per variant; the
//! emitters only ever read it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A member of a settings object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Raw JSON member name.
    pub key: String,
    /// Keys from the document root down to this node, root excluded.
    pub path: Vec<String>,
    pub value: NodeValue,
}

/// What a member holds: a leaf value or a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NodeValue {
    /// String, number, boolean, null or array.
    Scalar(Value),
    Object(ObjectNode),
}

/// Members of one JSON object in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectNode {
    children: Vec<ConfigNode>,
}

/// Declared type of a leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    Integer,
    Boolean,
    String,
    Sequence(Box<ScalarType>),
}

/// Declared type of a field or property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Scalar(ScalarType),
    /// A generated value type, by name.
    Value(String),
}

impl ObjectNode {
    pub(crate) fn new(children: Vec<ConfigNode>) -> Self {
        Self { children }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigNode> {
        self.children.iter()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|c| c.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.key.as_str())
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Integer => f.write_str("integer"),
            ScalarType::Boolean => f.write_str("boolean"),
            ScalarType::String => f.write_str("string"),
            ScalarType::Sequence(inner) => write!(f, "sequence<{inner}>"),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(ty) => ty.fmt(f),
            FieldType::Value(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(path: &[&str], value: Value) -> ConfigNode {
        ConfigNode {
            key: path.last().unwrap().to_string(),
            path: path.iter().map(|s| s.to_string()).collect(),
            value: NodeValue::Scalar(value),
        }
    }

    #[test]
    fn object_lookup_keeps_order() {
        let node = ObjectNode::new(vec![leaf(&["B"], json!(1)), leaf(&["A"], json!(2))]);
        assert_eq!(node.keys().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(node.get("A").unwrap().value, NodeValue::Scalar(json!(2)));
        assert!(node.get("C").is_none());
    }

    #[test]
    fn type_names_display() {
        let ty = ScalarType::Sequence(Box::new(ScalarType::Integer));
        assert_eq!(ty.to_string(), "sequence<integer>");
        assert_eq!(FieldType::Value("Flags".into()).to_string(), "Flags");
    }
}
