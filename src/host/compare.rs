use crate::foundation::buffer::{ColorImage, GrayImage};
use crate::foundation::error::{SketchError, SketchResult};

/// Lay the original (left) and the sketch (right) side by side.
///
/// The canvas is `2 * width + gutter_px` wide; the gutter is filled with `background`.
pub fn side_by_side(
    original: &ColorImage,
    sketch: &GrayImage,
    gutter_px: u32,
    background: [u8; 3],
) -> SketchResult<image::RgbImage> {
    if original.dimensions() != sketch.dimensions() {
        return Err(SketchError::validation(format!(
            "side_by_side expects equal dimensions, got {:?} and {:?}",
            original.dimensions(),
            sketch.dimensions()
        )));
    }
    let (w, h) = original.dimensions();
    let canvas_w = w
        .checked_mul(2)
        .and_then(|v| v.checked_add(gutter_px))
        .ok_or_else(|| SketchError::validation("comparison canvas size overflow"))?;

    let right = w + gutter_px;
    let canvas = image::RgbImage::from_fn(canvas_w, h, |x, y| {
        if x < w {
            image::Rgb(original.pixel(x, y))
        } else if x >= right {
            let v = sketch.pixel(x - right, y);
            image::Rgb([v, v, v])
        } else {
            image::Rgb(background)
        }
    });
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/host/compare.rs"]
mod tests;
