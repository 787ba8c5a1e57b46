//! Distribution of pool images into label subdirectories

use crate::error::PipelineError;
use crate::label::Label;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of a distribution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    /// Number of files copied
    pub copied: usize,
    /// Requested pool file names that did not exist
    pub missing: Vec<String>,
}

/// Copy `{label}-{i}.jpg` for every label and every `i` in
/// `start..end` from `input_dir` into `output_dir/{label}/`.
///
/// Missing pool files are collected and reported as a single warning once
/// the whole range has been attempted. Any other copy failure is fatal.
pub fn distribute(
    start: usize,
    end: usize,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<DistributionReport, PipelineError> {
    let mut report = DistributionReport::default();

    for label in Label::ALL {
        let class_dir = output_dir.join(label.as_str());
        for index in start..end {
            let file_name = label.file_name(index);
            let source = input_dir.join(&file_name);
            let target = class_dir.join(&file_name);

            match fs::copy(&source, &target) {
                Ok(_) => report.copied += 1,
                Err(e) if e.kind() == ErrorKind::NotFound && !source.exists() => {
                    report.missing.push(file_name);
                }
                Err(e) => return Err(PipelineError::io(&target, e)),
            }
        }
    }

    if !report.missing.is_empty() {
        tracing::warn!("Not found files: {:?}", report.missing);
    }

    tracing::info!(
        "Distributed {} files from {} into {}",
        report.copied,
        input_dir.display(),
        output_dir.display()
    );
    Ok(report)
}
