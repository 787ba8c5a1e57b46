use crate::error::PipelineError;
use image::{DynamicImage, GrayImage, Luma};

/// ITU-R 601-2 luma weights, in thousandths
const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;

/// Reduce the signature crop to one 8-bit channel.
///
/// Uses `L = (R*299 + G*587 + B*114) / 1000`, truncated, so pool images
/// keep the intensities the classifier was trained on. Alpha is ignored.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, PipelineError> {
    let rgb = image.to_rgb8();
    let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (u32::from(r) * RED_WEIGHT
            + u32::from(g) * GREEN_WEIGHT
            + u32::from(b) * BLUE_WEIGHT)
            / 1000;
        Luma([luma as u8])
    });
    Ok(DynamicImage::ImageLuma8(gray))
}
