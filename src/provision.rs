use crate::error::PipelineError;
use crate::label::Label;
use std::fs;
use std::path::Path;

/// Prepare an output directory with one subdirectory per label.
///
/// With `recreate` set, any existing tree at `dir` is removed first.
/// Without it the directory is left untouched and assumed to already hold
/// the label subdirectories. Removal and creation are not atomic: a failure
/// in between leaves `dir` absent.
pub fn provision(dir: &Path, recreate: bool) -> Result<(), PipelineError> {
    if !recreate {
        tracing::debug!("Keeping existing directory {}", dir.display());
        return Ok(());
    }

    if dir.exists() {
        tracing::debug!("Removing {}", dir.display());
        fs::remove_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    }

    for label in Label::ALL {
        let class_dir = dir.join(label.as_str());
        fs::create_dir_all(&class_dir).map_err(|e| PipelineError::io(&class_dir, e))?;
    }

    tracing::info!("Provisioned {}", dir.display());
    Ok(())
}

/// Wipe `dir` and create it empty, without label subdirectories
pub(crate) fn recreate_empty(dir: &Path) -> Result<(), PipelineError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_recreate_wipes_existing_content() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        fs::create_dir_all(out.join("true")).unwrap();
        fs::write(out.join("true").join("true-0.jpg"), b"old").unwrap();
        fs::write(out.join("unrelated.txt"), b"old").unwrap();
        fs::create_dir(out.join("stale")).unwrap();

        provision(&out, true).unwrap();

        assert_eq!(entry_names(&out), vec!["false", "true"]);
        assert!(entry_names(&out.join("true")).is_empty());
        assert!(entry_names(&out.join("false")).is_empty());
    }

    #[test]
    fn test_creates_missing_parents() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("a").join("b");

        provision(&out, true).unwrap();

        assert!(out.join("true").is_dir());
        assert!(out.join("false").is_dir());
    }

    #[test]
    fn test_preserve_is_noop() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        fs::create_dir_all(out.join("true")).unwrap();
        fs::write(out.join("true").join("true-0.jpg"), b"keep").unwrap();

        provision(&out, false).unwrap();

        assert_eq!(fs::read(out.join("true").join("true-0.jpg")).unwrap(), b"keep");
        assert!(!out.join("false").exists());
    }

    #[test]
    fn test_recreate_empty() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("raw");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("old.png"), b"x").unwrap();

        recreate_empty(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(entry_names(&dir).is_empty());
    }
}
