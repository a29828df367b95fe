//! Rust source emission.
//!
//! Emitters are plain functions from the schema tree to text; nothing is
//! shared between a holder and its value types.

pub mod accessor;
pub mod names;
pub mod value_types;

pub use accessor::{Constructor, FieldInit, Holder, Step, emit_holder, holder};
pub use value_types::{Field, ValueType, emit_value_types, render_value_type, value_types};
