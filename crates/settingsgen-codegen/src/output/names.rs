//! Identifier and type spelling for generated Rust.

use crate::ir::{FieldType, ScalarType};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

// Cannot be written as raw identifiers. `_` is not an identifier at all.
const SUFFIXED: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Replace `.` and `$` with `_`.
pub fn normalize_name(key: &str) -> String {
    key.replace(['.', '$'], "_")
}

/// Identifier for a field, property or value type named after `key`.
pub fn ident(key: &str) -> String {
    let name = match normalize_name(key) {
        name if name.is_empty() => "_".to_string(),
        name => name,
    };
    if SUFFIXED.contains(&name.as_str()) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name.as_str()) {
        format!("r#{name}")
    } else {
        name
    }
}

/// Module name scoped to a program: `demo-app` + `settings` is `demo_app_settings`.
pub fn module_name(program: &str, suffix: &str) -> String {
    let program: String = program
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if program.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{program}_{suffix}")
    } else {
        format!("{program}_{suffix}")
    }
}

/// Fully qualified spelling, immune to value types that shadow prelude names.
pub fn scalar_type(ty: &ScalarType) -> String {
    match ty {
        ScalarType::Integer => "::core::primitive::i64".to_string(),
        ScalarType::Boolean => "::core::primitive::bool".to_string(),
        ScalarType::String => "::std::string::String".to_string(),
        ScalarType::Sequence(inner) => format!("::std::vec::Vec<{}>", scalar_type(inner)),
    }
}

pub fn field_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Scalar(scalar) => scalar_type(scalar),
        FieldType::Value(name) => name.clone(),
    }
}

/// Rust string literal for `text`.
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
