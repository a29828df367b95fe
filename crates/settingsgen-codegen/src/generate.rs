//! Generation passes: one per [`Variant`], each isolated from the other.

use crate::input::{ParseError, parse_settings};
use crate::ir::ObjectNode;
use crate::output::{emit_holder, emit_value_types, holder};
use crate::variant::Variant;
use std::path::{Path, PathBuf};

/// Source text produced for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub variant: Variant,
    /// Output file name, e.g. `settings_generated.rs`.
    pub file_name: &'static str,
    pub text: String,
}

/// Why a variant produced no output.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("no `{0}` among the input files")]
    NotFound(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result of one generation pass.
#[derive(Debug)]
pub struct VariantOutcome {
    pub variant: Variant,
    pub result: Result<GeneratedSource, GenerateError>,
}

/// Runs every variant for one program.
#[derive(Debug, Clone)]
pub struct Generator {
    program: String,
}

impl Generator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Generate every variant from the candidate files. A failing variant is
    /// recorded and logged, never surfaced as a diagnostic, and does not
    /// affect the other one.
    pub fn generate(&self, candidates: &[PathBuf]) -> Vec<VariantOutcome> {
        Variant::ALL
            .into_iter()
            .map(|variant| {
                let result = self.generate_variant(candidates, variant);
                match &result {
                    Ok(source) => tracing::debug!(
                        %variant,
                        file = source.file_name,
                        "generated settings accessors"
                    ),
                    Err(err) => tracing::debug!(%variant, error = %err, "skipped variant"),
                }
                VariantOutcome { variant, result }
            })
            .collect()
    }

    /// Find the variant's settings file among `candidates` by exact file name
    /// (first match wins), read it and generate.
    pub fn generate_variant(
        &self,
        candidates: &[PathBuf],
        variant: Variant,
    ) -> Result<GeneratedSource, GenerateError> {
        let wanted = variant.file_name(&self.program);
        let path = candidates
            .iter()
            .find(|p| p.file_name().is_some_and(|name| name == wanted.as_str()))
            .ok_or_else(|| GenerateError::NotFound(wanted.clone()))?;
        tracing::trace!(path = %path.display(), %variant, "found settings file");
        let text = read(path)?;
        Ok(generate_from_text(&text, &self.program, variant)?)
    }
}

fn read(path: &Path) -> Result<String, GenerateError> {
    std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate one variant from the settings text.
pub fn generate_from_text(
    text: &str,
    program: &str,
    variant: Variant,
) -> Result<GeneratedSource, ParseError> {
    let root = parse_settings(text)?;
    Ok(GeneratedSource {
        variant,
        file_name: variant.output_file_name(),
        text: render(&root, program, variant),
    })
}

/// Complete source of one variant: header, module, holder, value types.
pub fn render(root: &ObjectNode, program: &str, variant: Variant) -> String {
    let holder = holder(root, variant, program);
    let value_types = emit_value_types(root);

    let mut out = format!(
        "// @generated by settingsgen from `{}`. Do not edit.\n\n",
        holder.file_name
    );
    out.push_str("#[allow(\n");
    out.push_str("    non_snake_case,\n");
    out.push_str("    non_camel_case_types,\n");
    out.push_str("    dead_code,\n");
    out.push_str("    unused_mut,\n");
    out.push_str("    unused_variables,\n");
    out.push_str("    clippy::all\n");
    out.push_str(")]\n");
    out.push_str(&format!("pub mod {} {{\n", holder.module_name));
    out.push_str(&emit_holder(&holder));
    if !value_types.is_empty() {
        out.push('\n');
        out.push_str(&value_types);
    }
    out.push_str("}\n");
    out
}

/// Successful sources, in variant order.
pub fn generated(outcomes: Vec<VariantOutcome>) -> Vec<GeneratedSource> {
    outcomes
        .into_iter()
        .filter_map(|outcome| outcome.result.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_idempotent() {
        let text = r#"{"Retry": 3, "Flags": {"Debug": true, "Inner": {"X": [1]}}, "Tags": []}"#;
        let first = generate_from_text(text, "demo", Variant::Public).unwrap();
        let second = generate_from_text(text, "demo", Variant::Public).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn variants_differ_only_in_names() {
        let text = r#"{"Retry": 3}"#;
        let public = generate_from_text(text, "demo", Variant::Public).unwrap();
        let internal = generate_from_text(text, "demo", Variant::Internal).unwrap();
        let renamed = public
            .text
            .replace("demo_settings", "demo_internal_settings")
            .replace("Settings", "InternalSettings")
            .replace("\"settings.json\"", "\"demo.settings.json\"")
            .replace("`settings.json`", "`demo.settings.json`");
        assert_eq!(renamed, internal.text);
        assert_eq!(internal.file_name, "internal_settings_generated.rs");
    }

    #[test]
    fn value_types_follow_the_holder() {
        let out = generate_from_text(r#"{"A": {"B": {}}}"#, "demo", Variant::Public)
            .unwrap()
            .text;
        let holder = out.find("pub struct Settings").unwrap();
        let a = out.find("pub struct A ").unwrap();
        let b = out.find("pub struct B ").unwrap();
        assert!(holder < a && a < b);
        assert!(out.ends_with("    pub struct B {}\n}\n"));
    }

    #[test]
    fn parse_failure_produces_no_source() {
        assert!(generate_from_text("[]", "demo", Variant::Public).is_err());
        assert!(generate_from_text("{", "demo", Variant::Internal).is_err());
    }

    #[test]
    fn missing_file_is_reported_per_variant() {
        let outcomes = Generator::new("demo").generate(&[]);
        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert!(matches!(outcome.result, Err(GenerateError::NotFound(_))));
        }
        assert!(generated(outcomes).is_empty());
    }
}
