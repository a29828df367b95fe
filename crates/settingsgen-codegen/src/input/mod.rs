//! Input parsing.
//!
//! Reads a settings document and produces the schema tree in [`crate::ir`].

mod settings;

pub use settings::{ParseError, parse_settings};
