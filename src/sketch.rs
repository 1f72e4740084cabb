use crate::filter::{blur, luma, point};
use crate::foundation::buffer::{ColorImage, GrayImage};
use crate::foundation::error::SketchResult;

/// Extent of the square Gaussian kernel blurred over the inverted luma plane.
pub const SKETCH_KERNEL_SIZE: u32 = 21;

/// Convert a color photograph into a grayscale pencil sketch.
///
/// Stages:
///
/// 1. `G`: BT.601 luma of the input
/// 2. `I = 255 - G`
/// 3. `B`: 21x21 Gaussian blur of `I` (sigma 3.5, reflect-101 borders)
/// 4. `IB = 255 - B`
/// 5. color dodge: `round(G * 256 / max(IB, 1))` saturated to `[0, 255]`
///
/// Flat regions wash out to white and edges stay dark. The output has the input's width and
/// height. The function is pure: identical input always yields identical output.
#[tracing::instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn sketch(image: &ColorImage) -> SketchResult<GrayImage> {
    let gray = luma::to_luma(image);
    let inverted = point::invert(&gray);
    let kernel = blur::GaussianKernel::from_size(SKETCH_KERNEL_SIZE)?;
    let blurred = blur::gaussian_blur(&inverted, &kernel);
    let inverted_blurred = point::invert(&blurred);
    let out = point::color_dodge(&gray, &inverted_blurred)?;
    tracing::debug!("sketch complete");
    Ok(out)
}

/// [`sketch`] over raw interleaved samples.
///
/// Fails with [`crate::SketchError::InvalidInputKind`] unless `channels == 3`.
pub fn sketch_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> SketchResult<GrayImage> {
    let image = ColorImage::from_raw(width, height, channels, data)?;
    sketch(&image)
}

#[cfg(test)]
#[path = "../tests/unit/sketch.rs"]
mod tests;
