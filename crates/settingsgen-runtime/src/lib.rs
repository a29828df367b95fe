//! Runtime support for code generated by `settingsgen`.
//!
//! Generated holder types read their settings file once, on first access,
//! from the directory that contains the running executable. The document is
//! kept as an untyped [`Value`] and every declared field is pulled out of it
//! by walking an explicit key path:
//!
//! ```
//! use settingsgen_runtime::{jsonc, read};
//!
//! let document = jsonc::parse(r#"{ "Flags": { "Debug": true } // local
//! }"#).unwrap();
//! let debug: bool = read(&document, &["Flags", "Debug"]).unwrap();
//! assert!(debug);
//! ```

pub mod jsonc;
pub mod value;

use std::path::{Path, PathBuf};

pub use jsonc::JsoncError;
pub use serde_json::Value;
pub use value::FromValue;

/// Error raised while loading a settings file or reading a field from it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: JsoncError,
    },

    #[error("field `{path}` is missing")]
    Missing { path: String },

    #[error("field `{path}` expected {expected}, found {found}")]
    Mismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// A value of the wrong kind at `path`.
    pub fn mismatch(path: &str, expected: &'static str, found: &Value) -> Self {
        Error::Mismatch {
            path: path.to_string(),
            expected,
            found: value::kind_name(found),
        }
    }
}

/// Path of `file_name` inside the directory of the running executable.
pub fn adjacent_path(file_name: &str) -> Result<PathBuf, Error> {
    let exe = std::env::current_exe().map_err(Error::CurrentExe)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(file_name))
}

/// Read and parse `file_name` from the directory of the running executable.
pub fn load_adjacent(file_name: &str) -> Result<Value, Error> {
    load_file(&adjacent_path(file_name)?)
}

/// Read and parse a settings file; comments are allowed.
pub fn load_file(path: &Path) -> Result<Value, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    jsonc::parse(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk `path` through nested objects; `None` when any segment is absent.
pub fn lookup<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(document, |current, key| current.as_object()?.get(*key))
}

/// The value at `path`, or [`Error::Missing`].
pub fn field<'a>(document: &'a Value, path: &[&str]) -> Result<&'a Value, Error> {
    lookup(document, path).ok_or_else(|| Error::Missing {
        path: path.join("."),
    })
}

/// Read the field at `path` and convert it to the declared type.
pub fn read<T: FromValue>(document: &Value, path: &[&str]) -> Result<T, Error> {
    T::from_value(field(document, path)?, &path.join("."))
}
