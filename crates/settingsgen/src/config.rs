//! Configuration for the `settingsgen` command.
//!
//! Read from `settingsgen.toml` in the source directory, or from the file
//! given with `--config`. Command line flags override both.
//!
//! ```toml
//! program_name = "my-app"
//! out_dir = "src/generated"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SettingsgenConfig {
    /// Program name used for `{program}.settings.json` and the module names.
    /// Defaults to the `[package].name` of `Cargo.toml`, then the directory name.
    pub program_name: Option<String>,
    /// Output directory, relative to the source directory. Defaults to `generated`.
    pub out_dir: Option<PathBuf>,
}

impl SettingsgenConfig {
    pub const FILE_NAME: &'static str = "settingsgen.toml";

    /// Load the explicit config file, which must exist, or else
    /// `settingsgen.toml` in `source_dir` if present.
    pub fn load(source_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("failed to parse {}", path.display()))
            }
            None => Ok(Self::load_file(&source_dir.join(Self::FILE_NAME)).unwrap_or_default()),
        }
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                None
            }
        }
    }

    pub fn program_name(&self, source_dir: &Path) -> Result<String> {
        if let Some(name) = &self.program_name {
            return Ok(name.clone());
        }
        if let Some(name) = package_name(&source_dir.join("Cargo.toml")) {
            return Ok(name);
        }
        let dir = source_dir
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", source_dir.display()))?;
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("cannot derive a program name from {}", dir.display()))
    }

    pub fn out_dir(&self, source_dir: &Path) -> PathBuf {
        match &self.out_dir {
            Some(dir) => source_dir.join(dir),
            None => source_dir.join("generated"),
        }
    }
}

fn package_name(manifest: &Path) -> Option<String> {
    let content = std::fs::read_to_string(manifest).ok()?;
    let table: toml::Table = toml::from_str(&content).ok()?;
    table
        .get("package")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}
