use crate::error::PipelineError;
use image::DynamicImage;
use serde::Serialize;
use std::time::Instant;

use super::steps;
use super::steps::crop::CropRegion;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingResult {
    /// Preprocessed image (not serialized)
    #[serde(skip)]
    pub image: DynamicImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Crop-then-grayscale pipeline applied to every raw scan
pub struct Pipeline {
    region: CropRegion,
}

impl Pipeline {
    pub fn new(region: CropRegion) -> Self {
        Self { region }
    }

    /// Crop the configured region and convert it to grayscale
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, PipelineError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let mut img = image;
        img = self.run_step("crop", img, &mut steps_timing, |img| {
            steps::crop::apply(img, &self.region)
        })?;
        img = self.run_step("grayscale", img, &mut steps_timing, steps::grayscale::apply)?;

        Ok(PreprocessingResult {
            image: img,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, PipelineError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, PipelineError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        Ok(result)
    }
}
