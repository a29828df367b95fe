//! Build-script integration.
//!
//! ```ignore
//! // build.rs
//! fn main() -> Result<(), settingsgen_codegen::cargo::BuildError> {
//!     settingsgen_codegen::cargo::generate_for_build().map(drop)
//! }
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/settingsgen.rs"));
//! ```
//!
//! Settings files are looked up in the package root, the program name is the
//! package name. A variant whose file is absent or malformed is skipped
//! without a warning; code referring to its types then fails to resolve.
//!
//! Cargo is told to rerun the build script only when an existing settings
//! file changes. Once either file exists, adding the other one later is not
//! noticed: touch `build.rs` or run `cargo clean -p <package>` to pick it up.
//! With neither file present Cargo keeps its default of rerunning on any
//! change in the package.

use crate::files;
use crate::generate::{GeneratedSource, Generator, generated};
use crate::variant::Variant;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("environment variable {0} is not set; run from a build script")]
    MissingEnv(&'static str),

    #[error("failed to list {}: {source}", dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated sources to {}: {source}", dir.display())]
    Write {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where to look, what to call the program and where to write.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub program_name: String,
    pub out_dir: PathBuf,
}

impl BuildOptions {
    /// Options from `CARGO_MANIFEST_DIR`, `CARGO_PKG_NAME` and `OUT_DIR`.
    pub fn from_env() -> Result<Self, BuildError> {
        Ok(Self {
            source_dir: env("CARGO_MANIFEST_DIR")?.into(),
            program_name: env("CARGO_PKG_NAME")?,
            out_dir: env("OUT_DIR")?.into(),
        })
    }

    /// Discover, generate and write; prints `cargo:rerun-if-changed` for the
    /// settings files that exist.
    pub fn run(&self) -> Result<Vec<GeneratedSource>, BuildError> {
        for directive in self.rerun_directives() {
            println!("{directive}");
        }
        self.generate()
    }

    /// Generate and write without talking to Cargo.
    pub fn generate(&self) -> Result<Vec<GeneratedSource>, BuildError> {
        let candidates = files::candidates(&self.source_dir).map_err(|source| BuildError::List {
            dir: self.source_dir.clone(),
            source,
        })?;
        let sources = generated(Generator::new(&self.program_name).generate(&candidates));
        files::write_sources(&self.out_dir, &sources).map_err(|source| BuildError::Write {
            dir: self.out_dir.clone(),
            source,
        })?;
        Ok(sources)
    }

    /// `cargo:rerun-if-changed` lines for the settings files that exist.
    /// A file created after the first build is not covered.
    pub fn rerun_directives(&self) -> Vec<String> {
        Variant::ALL
            .into_iter()
            .map(|variant| self.source_dir.join(variant.file_name(&self.program_name)))
            .filter(|path| path.is_file())
            .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
            .collect()
    }
}

/// [`BuildOptions::from_env`] followed by [`BuildOptions::run`].
pub fn generate_for_build() -> Result<Vec<GeneratedSource>, BuildError> {
    BuildOptions::from_env()?.run()
}

fn env(name: &'static str) -> Result<String, BuildError> {
    std::env::var(name).map_err(|_| BuildError::MissingEnv(name))
}
