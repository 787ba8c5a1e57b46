//! Image preprocessing for the signature crop
//!
//! Cuts the signature box out of a scanned form and reduces it to a
//! single-channel image ready for the training set.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};
pub use steps::crop::{CropRegion, SIGNATURE_REGION};
