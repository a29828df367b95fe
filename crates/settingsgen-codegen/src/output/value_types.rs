//! Value types: one immutable struct per nested settings object.

use super::names;
use crate::infer::infer_type;
use crate::ir::{ConfigNode, FieldType, NodeValue, ObjectNode};
use std::fmt::Write;

/// A struct generated for a nested object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueType {
    pub name: String,
    /// Key path of the object this type was generated for.
    pub path: Vec<String>,
    pub fields: Vec<Field>,
}

/// A member of a generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Raw JSON member name.
    pub key: String,
    pub ident: String,
    pub path: Vec<String>,
    pub ty: FieldType,
}

impl Field {
    /// Field describing `node`: leaves get their inferred type, objects
    /// their value type.
    pub fn for_node(node: &ConfigNode) -> Self {
        let ty = match &node.value {
            NodeValue::Scalar(value) => FieldType::Scalar(infer_type(value)),
            NodeValue::Object(_) => FieldType::Value(names::ident(&node.key)),
        };
        Self {
            key: node.key.clone(),
            ident: names::ident(&node.key),
            path: node.path.clone(),
            ty,
        }
    }
}

/// Value types for every object below `root`, depth-first in document
/// order: each type precedes the types of its nested objects.
pub fn value_types(root: &ObjectNode) -> Vec<ValueType> {
    root.iter().flat_map(value_types_of).collect()
}

fn value_types_of(node: &ConfigNode) -> Vec<ValueType> {
    let NodeValue::Object(children) = &node.value else {
        return Vec::new();
    };
    let own = ValueType {
        name: names::ident(&node.key),
        path: node.path.clone(),
        fields: children.iter().map(Field::for_node).collect(),
    };
    std::iter::once(own)
        .chain(children.iter().flat_map(value_types_of))
        .collect()
}

/// Render every value type below `root`, separated by blank lines.
pub fn emit_value_types(root: &ObjectNode) -> String {
    value_types(root)
        .iter()
        .map(render_value_type)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one value type at module indentation.
pub fn render_value_type(ty: &ValueType) -> String {
    let mut out = String::new();
    writeln!(out, "    /// Values of the `{}` section.", ty.path.join(".")).unwrap();
    out.push_str("    #[derive(Debug, Clone, Default, PartialEq, Eq)]\n");
    if ty.fields.is_empty() {
        writeln!(out, "    pub struct {} {{}}", ty.name).unwrap();
        return out;
    }
    writeln!(out, "    pub struct {} {{", ty.name).unwrap();
    for field in &ty.fields {
        writeln!(
            out,
            "        pub {}: {},",
            field.ident,
            names::field_type(&field.ty)
        )
        .unwrap();
    }
    out.push_str("    }\n");
    out
}
