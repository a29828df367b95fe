//! The two settings files a program can carry.

use crate::output::names;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which settings file a generation pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `Settings`, read from `settings.json`.
    Public,
    /// `InternalSettings`, read from `{program}.settings.json`.
    Internal,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Public, Variant::Internal];

    /// Name of the generated holder type.
    pub fn type_name(self) -> &'static str {
        match self {
            Variant::Public => "Settings",
            Variant::Internal => "InternalSettings",
        }
    }

    /// Settings file name, both at generation time and next to the binary.
    pub fn file_name(self, program: &str) -> String {
        match self {
            Variant::Public => "settings.json".to_string(),
            Variant::Internal => format!("{program}.settings.json"),
        }
    }

    /// Module wrapping the generated code, scoped to the program.
    pub fn module_name(self, program: &str) -> String {
        match self {
            Variant::Public => names::module_name(program, "settings"),
            Variant::Internal => names::module_name(program, "internal_settings"),
        }
    }

    /// File the generated source is written to.
    pub fn output_file_name(self) -> &'static str {
        match self {
            Variant::Public => "settings_generated.rs",
            Variant::Internal => "internal_settings_generated.rs",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
