//! Archive extraction
//!
//! Unpacks every archive found directly inside a source directory into a
//! destination directory, keeping the entry names stored in the archive.

use crate::error::PipelineError;
use crate::fsutil;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// Outcome of an extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    /// Number of archives unpacked
    pub archives: usize,
    /// Total number of entries across those archives
    pub entries: usize,
}

/// Unpack every archive in `source_dir` into `dest_dir`.
///
/// A missing `source_dir` holds no archives. Any file that is not a
/// readable ZIP archive aborts the pass.
pub fn extract(source_dir: &Path, dest_dir: &Path) -> Result<ExtractSummary, PipelineError> {
    let mut summary = ExtractSummary::default();

    if !source_dir.exists() {
        tracing::warn!("Archive directory {} does not exist", source_dir.display());
        return Ok(summary);
    }

    fs::create_dir_all(dest_dir).map_err(|e| PipelineError::io(dest_dir, e))?;

    for archive_path in fsutil::sorted_files(source_dir)? {
        let entries = unpack(&archive_path, dest_dir)?;
        tracing::debug!(
            "Unpacked {} ({} entries) into {}",
            archive_path.display(),
            entries,
            dest_dir.display()
        );
        summary.archives += 1;
        summary.entries += entries;
    }

    tracing::info!(
        "Extracted {} archives ({} entries) from {}",
        summary.archives,
        summary.entries,
        source_dir.display()
    );
    Ok(summary)
}

fn unpack(archive_path: &Path, dest_dir: &Path) -> Result<usize, PipelineError> {
    if !is_zip(archive_path) {
        return Err(PipelineError::UnsupportedArchive(archive_path.to_path_buf()));
    }

    let file = File::open(archive_path).map_err(|e| PipelineError::io(archive_path, e))?;
    let archive_err = |source| PipelineError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(archive_err)?;
    let entries = archive.len();
    archive.extract(dest_dir).map_err(archive_err)?;
    Ok(entries)
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}
