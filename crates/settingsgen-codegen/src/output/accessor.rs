//! The holder type: one property per top-level key plus the one-time
//! initializer that fills them from the file next to the executable.
//!
//! The initializer is planned as data ([`Step`], [`Constructor`]) before it is
//! rendered, so the same plan can be evaluated in-process by
//! [`Holder::simulate`] with the runtime conversions generated code uses.

use super::names;
use super::value_types::Field;
use crate::ir::{ConfigNode, FieldType, NodeValue, ObjectNode, ScalarType};
use crate::variant::Variant;
use serde_json::{Map, Value};
use settingsgen_runtime::{Error, FromValue};
use std::fmt::Write;

/// The generated holder type of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    pub type_name: String,
    pub file_name: String,
    pub module_name: String,
    pub properties: Vec<Field>,
    pub initializer: Vec<Step>,
}

/// One statement of the initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Read a top-level leaf straight into its property.
    Assign {
        property: String,
        path: Vec<String>,
        ty: ScalarType,
    },
    /// Build a value type for a top-level object.
    Construct {
        property: String,
        constructor: Constructor,
    },
}

/// Struct expression for a value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub type_name: String,
    pub fields: Vec<FieldInit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInit {
    Read {
        field: String,
        path: Vec<String>,
        ty: ScalarType,
    },
    Construct {
        field: String,
        constructor: Constructor,
    },
}

/// Plan the holder of `variant` for the document `root`.
pub fn holder(root: &ObjectNode, variant: Variant, program: &str) -> Holder {
    Holder {
        type_name: variant.type_name().to_string(),
        file_name: variant.file_name(program),
        module_name: variant.module_name(program),
        properties: root.iter().map(Field::for_node).collect(),
        initializer: root.iter().filter_map(step_for).collect(),
    }
}

// Only top-level strings, numbers and arrays are assigned. Booleans and nulls
// are declared on the holder but keep their default.
fn step_for(node: &ConfigNode) -> Option<Step> {
    let property = names::ident(&node.key);
    match &node.value {
        NodeValue::Object(children) => Some(Step::Construct {
            property,
            constructor: constructor(&node.key, children),
        }),
        NodeValue::Scalar(value @ (Value::String(_) | Value::Number(_) | Value::Array(_))) => {
            Some(Step::Assign {
                property,
                path: node.path.clone(),
                ty: crate::infer::infer_type(value),
            })
        }
        NodeValue::Scalar(_) => None,
    }
}

fn constructor(key: &str, children: &ObjectNode) -> Constructor {
    let fields = children
        .iter()
        .map(|child| match &child.value {
            NodeValue::Object(nested) => FieldInit::Construct {
                field: names::ident(&child.key),
                constructor: constructor(&child.key, nested),
            },
            NodeValue::Scalar(value) => FieldInit::Read {
                field: names::ident(&child.key),
                path: child.path.clone(),
                ty: crate::infer::infer_type(value),
            },
        })
        .collect();
    Constructor {
        type_name: names::ident(key),
        fields,
    }
}

impl Holder {
    /// Run the initializer against `document` without compiling anything.
    ///
    /// Returns every property keyed by its identifier. Properties the
    /// initializer never assigns hold their type's default.
    pub fn simulate(&self, document: &Value) -> Result<Map<String, Value>, Error> {
        let mut values: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.ident.clone(), default_value(&p.ty)))
            .collect();
        for step in &self.initializer {
            match step {
                Step::Assign { property, path, ty } => {
                    values.insert(property.clone(), read_as(ty, document, path)?);
                }
                Step::Construct {
                    property,
                    constructor,
                } => {
                    values.insert(property.clone(), constructor.simulate(document)?);
                }
            }
        }
        Ok(values)
    }
}

impl Constructor {
    fn simulate(&self, document: &Value) -> Result<Value, Error> {
        let mut fields = Map::new();
        for init in &self.fields {
            match init {
                FieldInit::Read { field, path, ty } => {
                    fields.insert(field.clone(), read_as(ty, document, path)?);
                }
                FieldInit::Construct { field, constructor } => {
                    fields.insert(field.clone(), constructor.simulate(document)?);
                }
            }
        }
        Ok(Value::Object(fields))
    }
}

fn default_value(ty: &FieldType) -> Value {
    match ty {
        FieldType::Scalar(ScalarType::Integer) => Value::from(0),
        FieldType::Scalar(ScalarType::Boolean) => Value::Bool(false),
        FieldType::Scalar(ScalarType::String) => Value::String(String::new()),
        FieldType::Scalar(ScalarType::Sequence(_)) => Value::Array(Vec::new()),
        FieldType::Value(_) => Value::Object(Map::new()),
    }
}

fn read_as(ty: &ScalarType, document: &Value, path: &[String]) -> Result<Value, Error> {
    let keys: Vec<&str> = path.iter().map(String::as_str).collect();
    let value = settingsgen_runtime::field(document, &keys)?;
    convert(ty, value, &keys.join("."))
}

// Mirrors `FromValue` for the declared Rust type of `ty`.
fn convert(ty: &ScalarType, value: &Value, path: &str) -> Result<Value, Error> {
    Ok(match ty {
        ScalarType::Integer => Value::from(i64::from_value(value, path)?),
        ScalarType::Boolean => Value::from(bool::from_value(value, path)?),
        ScalarType::String => Value::from(String::from_value(value, path)?),
        ScalarType::Sequence(inner) => {
            let items = value
                .as_array()
                .ok_or_else(|| Error::mismatch(path, "array", value))?;
            Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| convert(inner, item, &format!("{path}[{index}]")))
                    .collect::<Result<_, _>>()?,
            )
        }
    })
}

/// Render the holder: file name constant, lazily initialized instance,
/// struct declaration and accessor impl, at module indentation.
pub fn emit_holder(holder: &Holder) -> String {
    let name = &holder.type_name;
    let mut out = String::new();

    out.push_str("    /// File read from the directory of the running executable.\n");
    writeln!(
        out,
        "    pub const FILE_NAME: &str = {};",
        names::string_literal(&holder.file_name)
    )
    .unwrap();
    out.push('\n');

    writeln!(
        out,
        "    static INSTANCE: ::std::sync::LazyLock<{name}> = ::std::sync::LazyLock::new(|| {{"
    )
    .unwrap();
    writeln!(
        out,
        "        {name}::load().unwrap_or_else(|err| panic!(\"failed to load {{FILE_NAME}}: {{err}}\"))"
    )
    .unwrap();
    out.push_str("    });\n\n");

    writeln!(out, "    /// Typed view of `{}`.", holder.file_name).unwrap();
    out.push_str("    #[derive(Debug, Clone, Default, PartialEq, Eq)]\n");
    if holder.properties.is_empty() {
        writeln!(out, "    pub struct {name} {{}}").unwrap();
    } else {
        writeln!(out, "    pub struct {name} {{").unwrap();
        for property in &holder.properties {
            writeln!(
                out,
                "        pub {}: {},",
                property.ident,
                names::field_type(&property.ty)
            )
            .unwrap();
        }
        out.push_str("    }\n");
    }
    out.push('\n');

    writeln!(out, "    impl {name} {{").unwrap();
    out.push_str("        /// The process-wide instance, loaded on first access.\n");
    out.push_str("        ///\n");
    out.push_str("        /// Panics if the file cannot be read or does not match the declared types.\n");
    writeln!(out, "        pub fn get() -> &'static {name} {{").unwrap();
    out.push_str("            &INSTANCE\n");
    out.push_str("        }\n\n");

    out.push_str("        /// Reads and parses [`FILE_NAME`] next to the running executable.\n");
    out.push_str(
        "        pub fn load() -> ::core::result::Result<Self, ::settingsgen_runtime::Error> {\n",
    );
    out.push_str(
        "            let document = ::settingsgen_runtime::load_adjacent(FILE_NAME)?;\n",
    );
    out.push_str("            Self::from_document(&document)\n");
    out.push_str("        }\n\n");

    out.push_str("        /// Builds the settings from an already parsed document.\n");
    out.push_str("        pub fn from_document(\n");
    out.push_str("            document: &::settingsgen_runtime::Value,\n");
    out.push_str("        ) -> ::core::result::Result<Self, ::settingsgen_runtime::Error> {\n");
    out.push_str("            let mut settings = Self::default();\n");
    for step in &holder.initializer {
        match step {
            Step::Assign { property, path, .. } => {
                writeln!(out, "            settings.{property} = {};", read_expr(path)).unwrap();
            }
            Step::Construct {
                property,
                constructor,
            } => {
                writeln!(
                    out,
                    "            settings.{property} = {};",
                    render_constructor(constructor, 3)
                )
                .unwrap();
            }
        }
    }
    out.push_str("            ::core::result::Result::Ok(settings)\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}

fn read_expr(path: &[String]) -> String {
    let keys: Vec<String> = path.iter().map(|k| names::string_literal(k)).collect();
    format!("::settingsgen_runtime::read(document, &[{}])?", keys.join(", "))
}

fn render_constructor(constructor: &Constructor, depth: usize) -> String {
    if constructor.fields.is_empty() {
        return format!("{} {{}}", constructor.type_name);
    }
    let indent = "    ".repeat(depth);
    let mut out = format!("{} {{\n", constructor.type_name);
    for init in &constructor.fields {
        match init {
            FieldInit::Read { field, path, .. } => {
                writeln!(out, "{indent}    {field}: {},", read_expr(path)).unwrap();
            }
            FieldInit::Construct { field, constructor } => {
                writeln!(
                    out,
                    "{indent}    {field}: {},",
                    render_constructor(constructor, depth + 1)
                )
                .unwrap();
            }
        }
    }
    out.push_str(&indent);
    out.push('}');
    out
}
