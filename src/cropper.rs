//! Region cropping and relabeling of raw scans
//!
//! Every raw image in the input directory is cropped to the signature box,
//! reduced to grayscale and written into a flat pool as `{label}-{n}.jpg`,
//! with `n` counting up from zero separately for each label.

use crate::error::PipelineError;
use crate::fsutil;
use crate::label::Label;
use crate::preprocessing::{CropRegion, Pipeline};
use serde::Serialize;
use std::path::Path;

/// Outcome of a crop pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CropSummary {
    pub true_count: usize,
    pub false_count: usize,
    /// Raw file names carrying neither class marker
    pub skipped: Vec<String>,
}

impl CropSummary {
    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::True => self.true_count,
            Label::False => self.false_count,
        }
    }

    fn next_index(&mut self, label: Label) -> usize {
        let counter = match label {
            Label::True => &mut self.true_count,
            Label::False => &mut self.false_count,
        };
        let index = *counter;
        *counter += 1;
        index
    }
}

/// Crop every raw image in `input_dir` into the pool at `output_dir`.
///
/// Files are visited in file-name order. Unreadable images abort the pass;
/// unmarked file names are skipped without consuming a sequence number.
pub fn crop_and_label(
    input_dir: &Path,
    output_dir: &Path,
    region: CropRegion,
) -> Result<CropSummary, PipelineError> {
    let pipeline = Pipeline::new(region);
    let mut summary = CropSummary::default();

    for raw_path in fsutil::sorted_files(input_dir)? {
        let file_name = raw_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(label) = Label::from_file_name(&file_name) else {
            summary.skipped.push(file_name);
            continue;
        };

        let image = image::open(&raw_path).map_err(|e| PipelineError::image(&raw_path, e))?;
        let result = pipeline.process(image)?;

        let out_path = output_dir.join(label.file_name(summary.next_index(label)));
        result
            .image
            .save(&out_path)
            .map_err(|e| PipelineError::image(&out_path, e))?;

        tracing::debug!(
            "Cropped {} -> {} in {}ms",
            file_name,
            out_path.display(),
            result.total_time_ms
        );
    }

    if !summary.skipped.is_empty() {
        tracing::warn!(
            "Skipped {} files without a class marker: {:?}",
            summary.skipped.len(),
            summary.skipped
        );
    }

    tracing::info!(
        "Cropped {} true and {} false images into {}",
        summary.true_count,
        summary.false_count,
        output_dir.display()
    );
    Ok(summary)
}
