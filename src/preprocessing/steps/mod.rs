//! Individual preprocessing steps

pub mod crop;
pub mod grayscale;
