//! Typed Rust accessors generated from JSON settings files.
//!
//! `settingsgen-codegen` reads a settings document (JSON, comments allowed)
//! and emits a holder struct with one property per top-level key, one value
//! struct per nested object, and an initializer that loads the same file from
//! next to the running executable on first access.
//!
//! # Architecture
//!
//! ```text
//! settings.json ──> parse_settings ──> ObjectNode ──┬─> value_types  ─┐
//!                   (input)            (ir.rs)      └─> holder        ├─> render ──> Rust source
//!                                                       (output)     ─┘   (generate.rs)
//! ```
//!
//! Every program has two variants: `Settings` from `settings.json` and
//! `InternalSettings` from `{program}.settings.json`. They are generated
//! independently and a failure in one never affects the other.
//!
//! # Example
//!
//! ```
//! use settingsgen_codegen::{Variant, generate_from_text};
//!
//! let source = generate_from_text(
//!     r#"{ "Retry": 3, "Flags": { "Debug": true } }"#,
//!     "demo",
//!     Variant::Public,
//! )
//! .unwrap();
//!
//! assert!(source.text.contains("pub mod demo_settings {"));
//! assert!(source.text.contains("pub Retry: ::core::primitive::i64,"));
//! assert!(source.text.contains("pub Flags: Flags,"));
//! assert!(source.text.contains("pub struct Flags {"));
//! ```

pub mod cargo;
pub mod files;
pub mod generate;
pub mod infer;
pub mod input;
pub mod ir;
pub mod output;
pub mod variant;

pub use generate::{
    GenerateError, GeneratedSource, Generator, VariantOutcome, generate_from_text, generated,
    render,
};
pub use infer::infer_type;
pub use input::{ParseError, parse_settings};
pub use ir::{ConfigNode, FieldType, NodeValue, ObjectNode, ScalarType};
pub use output::{Holder, ValueType, emit_holder, emit_value_types, holder, value_types};
pub use variant::Variant;
