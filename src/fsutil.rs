//! Directory listing helpers shared by the pipeline stages

use crate::error::PipelineError;
use std::fs;
use std::path::{Path, PathBuf};

/// Regular files directly inside `dir`, sorted by file name.
/// Dangling symlinks are listed too, as a directory walk would.
///
/// Sorting makes sequence numbering independent of the platform's
/// directory enumeration order.
pub fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files = entries(dir, |file_type| file_type.is_file() || file_type.is_symlink())?;
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Immediate subdirectories of `dir`
pub fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    entries(dir, |file_type| file_type.is_dir())
}

fn entries<F>(dir: &Path, keep: F) -> Result<Vec<PathBuf>, PipelineError>
where
    F: Fn(&fs::FileType) -> bool,
{
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PipelineError::io(dir, e))? {
        let entry = entry.map_err(|e| PipelineError::io(dir, e))?;
        let path = entry.path();
        let mut file_type = entry.file_type().map_err(|e| PipelineError::io(&path, e))?;
        if file_type.is_symlink() {
            // Resolve the link target; a dangling link stays a link and is
            // listed as a file
            if let Ok(metadata) = fs::metadata(&path) {
                file_type = metadata.file_type();
            }
        }
        if keep(&file_type) {
            paths.push(path);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<_> = sorted_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("true")).unwrap();
        fs::write(dir.path().join("loose.jpg"), b"x").unwrap();

        let subdirs = subdirectories(dir.path()).unwrap();
        assert_eq!(subdirs, vec![dir.path().join("true")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_resolved_and_dangling_ones_kept() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real_dir")).unwrap();
        fs::write(dir.path().join("real.jpg"), b"x").unwrap();
        symlink(dir.path().join("real.jpg"), dir.path().join("linked.jpg")).unwrap();
        symlink(dir.path().join("real_dir"), dir.path().join("linked_dir")).unwrap();
        symlink(dir.path().join("gone.jpg"), dir.path().join("dangling.jpg")).unwrap();

        let files: Vec<_> = sorted_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, vec!["dangling.jpg", "linked.jpg", "real.jpg"]);

        let mut subdirs = subdirectories(dir.path()).unwrap();
        subdirs.sort();
        assert_eq!(
            subdirs,
            vec![dir.path().join("linked_dir"), dir.path().join("real_dir")]
        );
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = sorted_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
