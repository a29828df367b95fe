//! Discovering settings files and writing generated sources.

use crate::generate::GeneratedSource;
use crate::variant::Variant;
use std::io;
use std::path::{Path, PathBuf};

/// File that includes every generated variant; consumers `include!` this one.
pub const AGGREGATE_FILE_NAME: &str = "settingsgen.rs";

/// Regular files directly inside `dir`, sorted by path.
pub fn candidates(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    tracing::trace!(dir = %dir.display(), count = files.len(), "listed candidate files");
    Ok(files)
}

/// Write one file per generated variant plus [`AGGREGATE_FILE_NAME`].
///
/// Files of variants missing from `sources` are removed so a deleted settings
/// file does not leave stale types behind. Unchanged files are not touched.
/// Returns the paths of the files now present.
pub fn write_sources(out_dir: &Path, sources: &[GeneratedSource]) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for variant in Variant::ALL {
        let path = out_dir.join(variant.output_file_name());
        match sources.iter().find(|s| s.variant == variant) {
            Some(source) => {
                write_if_changed(&path, &source.text)?;
                written.push(path);
            }
            None if path.exists() => {
                std::fs::remove_file(&path)?;
                tracing::debug!(path = %path.display(), "removed stale output");
            }
            None => {}
        }
    }

    let aggregate = sources
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let path = out_dir.join(AGGREGATE_FILE_NAME);
    write_if_changed(&path, &aggregate)?;
    written.push(path);

    Ok(written)
}

fn write_if_changed(path: &Path, contents: &str) -> io::Result<()> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        return Ok(());
    }
    std::fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), "wrote generated source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_from_text;
    use tempfile::tempdir;

    #[test]
    fn candidates_lists_only_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<_> = candidates(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "settings.json"]);
    }

    #[test]
    fn writes_variant_files_and_aggregate() {
        let dir = tempdir().unwrap();
        let public = generate_from_text(r#"{"A": 1}"#, "demo", Variant::Public).unwrap();
        let internal = generate_from_text(r#"{"B": 2}"#, "demo", Variant::Internal).unwrap();

        let written = write_sources(dir.path(), &[public.clone(), internal.clone()]).unwrap();
        assert_eq!(written.len(), 3);

        let aggregate = std::fs::read_to_string(dir.path().join(AGGREGATE_FILE_NAME)).unwrap();
        assert_eq!(aggregate, format!("{}\n{}", public.text, internal.text));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("settings_generated.rs")).unwrap(),
            public.text
        );
    }

    #[test]
    fn skipped_variant_removes_stale_file() {
        let dir = tempdir().unwrap();
        let public = generate_from_text(r#"{"A": 1}"#, "demo", Variant::Public).unwrap();
        let internal = generate_from_text(r#"{"B": 2}"#, "demo", Variant::Internal).unwrap();
        write_sources(dir.path(), &[public.clone(), internal]).unwrap();

        write_sources(dir.path(), &[public.clone()]).unwrap();
        assert!(!dir.path().join("internal_settings_generated.rs").exists());
        let aggregate = std::fs::read_to_string(dir.path().join(AGGREGATE_FILE_NAME)).unwrap();
        assert_eq!(aggregate, public.text);
    }

    #[test]
    fn no_sources_leaves_an_empty_aggregate() {
        let dir = tempdir().unwrap();
        let written = write_sources(&dir.path().join("out"), &[]).unwrap();
        assert_eq!(written, [dir.path().join("out").join(AGGREGATE_FILE_NAME)]);
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "");
    }
}
