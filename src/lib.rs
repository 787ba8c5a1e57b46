//! Staging pipeline for signature-verification training data
//!
//! Raw scans arrive as archives, are cropped down to the signature box,
//! numbered per class into a flat pool and finally copied into output
//! directories with one subdirectory per class.

pub mod accountant;
pub mod archive;
pub mod config;
pub mod cropper;
pub mod distribute;
pub mod error;
mod fsutil;
pub mod label;
pub mod preprocessing;
pub mod provision;
pub mod stager;

pub use config::{DirectoryConfig, Split};
pub use error::PipelineError;
pub use label::Label;
pub use stager::{DatasetStager, StageReport, TestDataReport};
