use crate::error::PipelineError;
use crate::fsutil;
use std::path::Path;

/// Count files two levels down: for each directory, the files directly
/// inside each of its immediate subdirectories.
pub fn count_files<P: AsRef<Path>>(dirs: &[P]) -> Result<usize, PipelineError> {
    let mut total = 0;
    for dir in dirs {
        let dir = dir.as_ref();
        for subdir in fsutil::subdirectories(dir)? {
            total += fsutil::sorted_files(&subdir)?.len();
        }
        tracing::debug!("Counted files under {} (running total {})", dir.display(), total);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn labelled_dir(root: &Path, name: &str, trues: usize, falses: usize) -> std::path::PathBuf {
        let dir = root.join(name);
        for (label, n) in [("true", trues), ("false", falses)] {
            fs::create_dir_all(dir.join(label)).unwrap();
            for i in 0..n {
                fs::write(dir.join(label).join(format!("{label}-{i}.jpg")), b"x").unwrap();
            }
        }
        dir
    }

    #[test]
    fn test_counts_both_labels() {
        let root = tempfile::tempdir().unwrap();
        let dir = labelled_dir(root.path(), "train", 3, 2);
        assert_eq!(count_files(&[dir]).unwrap(), 5);
    }

    #[test]
    fn test_sums_across_directories() {
        let root = tempfile::tempdir().unwrap();
        let train = labelled_dir(root.path(), "train", 3, 2);
        let test = labelled_dir(root.path(), "test", 1, 4);
        assert_eq!(count_files(&[train, test]).unwrap(), 10);
    }

    #[test]
    fn test_ignores_top_level_files_and_deeper_levels() {
        let root = tempfile::tempdir().unwrap();
        let dir = labelled_dir(root.path(), "train", 1, 0);
        fs::write(dir.join("loose.jpg"), b"x").unwrap();
        fs::create_dir_all(dir.join("true").join("nested")).unwrap();
        fs::write(dir.join("true").join("nested").join("deep.jpg"), b"x").unwrap();

        assert_eq!(count_files(&[dir]).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_counted() {
        let root = tempfile::tempdir().unwrap();
        let dir = labelled_dir(root.path(), "train", 2, 0);
        std::os::unix::fs::symlink(
            root.path().join("gone.jpg"),
            dir.join("false").join("false-0.jpg"),
        )
        .unwrap();

        assert_eq!(count_files(&[dir]).unwrap(), 3);
    }

    #[test]
    fn test_flat_directory_counts_zero() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("true-0.jpg"), b"x").unwrap();
        assert_eq!(count_files(&[root.path()]).unwrap(), 0);
    }
}
