//! Subcommands of the `settingsgen` binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use settingsgen_codegen::Variant;
use std::path::{Path, PathBuf};

pub mod generate;
pub mod inspect;
pub mod preview;

#[derive(Parser)]
#[command(
    name = "settingsgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate typed Rust accessors from JSON settings files"
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of `settingsgen.toml`
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate accessor sources for the settings files of a directory
    Generate(generate::GenerateArgs),
    /// Show the types inferred from a settings file
    Inspect(inspect::InspectArgs),
    /// Show the values the generated initializer reads from a settings file
    Preview(preview::PreviewArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose);

        match self.command {
            Commands::Generate(args) => generate::execute(args, self.config.as_deref()),
            Commands::Inspect(args) => inspect::execute(args),
            Commands::Preview(args) => preview::execute(args),
        }
    }
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Variant and program name implied by a settings file name:
/// `{program}.settings.json` is internal, anything else public.
fn variant_for(path: &Path) -> (Variant, String) {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".settings.json") {
        Some(program) if !program.is_empty() => (Variant::Internal, program.to_string()),
        _ => (Variant::Public, String::new()),
    }
}

fn read_settings(path: &Path) -> Result<settingsgen_codegen::ObjectNode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    settingsgen_codegen::parse_settings(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_select_the_variant() {
        assert_eq!(
            variant_for(Path::new("dir/settings.json")),
            (Variant::Public, String::new())
        );
        assert_eq!(
            variant_for(Path::new("my-app.settings.json")),
            (Variant::Internal, "my-app".to_string())
        );
        assert_eq!(
            variant_for(Path::new(".settings.json")),
            (Variant::Public, String::new())
        );
    }
}
