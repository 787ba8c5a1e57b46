//! Dataset staging workflows
//!
//! `DatasetStager` sequences extraction, cropping, provisioning and
//! distribution over the fixed directory layout. Each workflow runs its
//! stages in order and stops at the first failure; re-running the whole
//! workflow is the way to recover.

use crate::accountant;
use crate::archive::{self, ExtractSummary};
use crate::config::{DirectoryConfig, Split};
use crate::cropper::{self, CropSummary};
use crate::distribute::{self, DistributionReport};
use crate::error::PipelineError;
use crate::preprocessing::{CropRegion, SIGNATURE_REGION};
use crate::provision;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Result of an extract-and-crop pass over one split
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub extract: ExtractSummary,
    pub crop: CropSummary,
}

/// Result of adding test data to an output directory
#[derive(Debug, Clone, Serialize)]
pub struct TestDataReport {
    #[serde(flatten)]
    pub stage: StageReport,
    pub distribution: DistributionReport,
}

/// Runs the staging workflows against one directory layout
#[derive(Debug, Clone)]
pub struct DatasetStager {
    config: DirectoryConfig,
    region: CropRegion,
}

impl DatasetStager {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            config,
            region: SIGNATURE_REGION,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Wipe the raw and processed directories of both splits, then extract
    /// and crop the training archives into the training pool.
    pub fn prepare_training_data(&self) -> Result<StageReport, PipelineError> {
        tracing::info!("Preparing training data");
        for split in Split::ALL {
            provision::recreate_empty(self.config.raw_dir(split))?;
            provision::recreate_empty(self.config.processed_dir(split))?;
        }
        self.stage(Split::Train)
    }

    /// Recreate `output_dir` and fill it with pool indices `start..end`
    /// from the training pool.
    pub fn process_data(
        &self,
        output_dir: &Path,
        start: usize,
        end: usize,
    ) -> Result<DistributionReport, PipelineError> {
        provision::provision(output_dir, true)?;
        distribute::distribute(
            start,
            end,
            self.config.processed_dir(Split::Train),
            output_dir,
        )
    }

    /// Extract and crop the test archives, then distribute pool indices
    /// `0..file_count` into `output_dir`. With `create_new_dir` unset the
    /// existing contents of `output_dir` are kept and added to.
    pub fn add_test_data(
        &self,
        output_dir: &Path,
        file_count: usize,
        create_new_dir: bool,
    ) -> Result<TestDataReport, PipelineError> {
        tracing::info!("Adding test data to {}", output_dir.display());
        for dir in [
            self.config.raw_dir(Split::Test),
            self.config.processed_dir(Split::Test),
        ] {
            fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
        }

        let stage = self.stage(Split::Test)?;
        provision::provision(output_dir, create_new_dir)?;
        let distribution = distribute::distribute(
            0,
            file_count,
            self.config.processed_dir(Split::Test),
            output_dir,
        )?;

        Ok(TestDataReport {
            stage,
            distribution,
        })
    }

    /// Total number of files in the label subdirectories of `dirs`
    pub fn count_files<P: AsRef<Path>>(&self, dirs: &[P]) -> Result<usize, PipelineError> {
        accountant::count_files(dirs)
    }

    /// Width and height of the image at `path`
    pub fn image_size(&self, path: &Path) -> Result<(u32, u32), PipelineError> {
        image::image_dimensions(path).map_err(|e| PipelineError::image(path, e))
    }

    fn stage(&self, split: Split) -> Result<StageReport, PipelineError> {
        let raw_dir = self.config.raw_dir(split);
        let extract = archive::extract(self.config.archive_dir(split), raw_dir)?;
        let crop = cropper::crop_and_label(raw_dir, self.config.processed_dir(split), self.region)?;
        Ok(StageReport { extract, crop })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_prepare_resets_pools() {
        let root = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::new(root.path());
        fs::create_dir_all(&config.test_processed).unwrap();
        fs::write(config.test_processed.join("true-0.jpg"), b"stale").unwrap();

        let report = DatasetStager::new(config.clone())
            .prepare_training_data()
            .unwrap();

        assert_eq!(report.extract, ExtractSummary::default());
        assert_eq!(report.crop, CropSummary::default());
        for split in Split::ALL {
            assert!(config.raw_dir(split).is_dir());
            assert!(config.processed_dir(split).is_dir());
        }
        assert!(!config.test_processed.join("true-0.jpg").exists());
    }

    #[test]
    fn test_image_size() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("scan.png");
        RgbImage::from_pixel(32, 18, Rgb([1, 2, 3])).save(&path).unwrap();

        let stager = DatasetStager::new(DirectoryConfig::new(root.path()));
        assert_eq!(stager.image_size(&path).unwrap(), (32, 18));
    }

    #[test]
    fn test_image_size_of_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let stager = DatasetStager::new(DirectoryConfig::new(root.path()));
        assert!(stager.image_size(&root.path().join("none.png")).is_err());
    }
}
