use crate::error::PipelineError;
use image::{imageops, DynamicImage, GenericImageView};
use serde::Serialize;

/// Axis-aligned pixel rectangle to cut out of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Signature box on the scanned form: corners (830, 1465) and (1435, 1570)
pub const SIGNATURE_REGION: CropRegion = CropRegion::from_corners(830, 1465, 1435, 1570);

impl CropRegion {
    /// Build a region from its upper-left and lower-right corners.
    /// Swapped corners give an empty region.
    pub const fn from_corners(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x + self.width <= width && self.y + self.height <= height
    }
}

/// Cut `region` out of the image.
/// Parts of the region outside the image come out black, so the result
/// always has the region's dimensions.
pub fn apply(image: DynamicImage, region: &CropRegion) -> Result<DynamicImage, PipelineError> {
    let (width, height) = image.dimensions();
    if region.fits_within(width, height) {
        return Ok(image.crop_imm(region.x, region.y, region.width, region.height));
    }

    tracing::debug!(
        "Crop region {:?} exceeds {}x{} image, padding with black",
        region,
        width,
        height
    );
    let mut canvas = DynamicImage::new_rgb8(region.width, region.height);
    imageops::overlay(
        &mut canvas,
        &image,
        -i64::from(region.x),
        -i64::from(region.y),
    );
    Ok(canvas)
}
