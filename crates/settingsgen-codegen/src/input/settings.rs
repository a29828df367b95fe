//! Settings document to schema tree.

use crate::ir::{ConfigNode, NodeValue, ObjectNode};
use serde_json::{Map, Value};
use settingsgen_runtime::{JsoncError, value::kind_name};

/// Why a settings document could not be turned into a schema tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid settings document: {0}")]
    Syntax(#[from] JsoncError),

    #[error("settings root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Parse commented JSON text into the ordered schema tree of its root object.
pub fn parse_settings(text: &str) -> Result<ObjectNode, ParseError> {
    match settingsgen_runtime::jsonc::parse(text)? {
        Value::Object(members) => Ok(object_node(&members, &[])),
        other => Err(ParseError::NotAnObject(kind_name(&other))),
    }
}

fn object_node(members: &Map<String, Value>, parent: &[String]) -> ObjectNode {
    let children = members
        .iter()
        .map(|(key, value)| {
            let mut path = parent.to_vec();
            path.push(key.clone());
            let value = match value {
                Value::Object(nested) => NodeValue::Object(object_node(nested, &path)),
                other => NodeValue::Scalar(other.clone()),
            };
            ConfigNode {
                key: key.clone(),
                path,
                value,
            }
        })
        .collect();
    ObjectNode::new(children)
}
