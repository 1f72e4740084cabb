use crate::foundation::buffer::GrayImage;
use crate::foundation::error::{SketchError, SketchResult};

/// Scale applied by the color-dodge divide.
pub const DODGE_SCALE: f64 = 256.0;

/// `255 - v` for every sample.
pub fn invert(img: &GrayImage) -> GrayImage {
    img.with_same_shape(img.as_raw().iter().map(|&v| 255 - v).collect())
}

/// Color dodge of one sample: `round(base * 256 / max(inv_blend, 1))`, saturated to `u8`.
///
/// Ties round to even. A zero denominator is treated as 1.
pub fn dodge_u8(base: u8, inv_blend: u8) -> u8 {
    let denom = f64::from(inv_blend.max(1));
    let q = (f64::from(base) * DODGE_SCALE / denom).round_ties_even();
    q.clamp(0.0, 255.0) as u8
}

/// Pointwise color dodge of `base` by an already inverted blend layer.
pub fn color_dodge(base: &GrayImage, inv_blend: &GrayImage) -> SketchResult<GrayImage> {
    if base.dimensions() != inv_blend.dimensions() {
        return Err(SketchError::validation(format!(
            "color_dodge expects equal dimensions, got {:?} and {:?}",
            base.dimensions(),
            inv_blend.dimensions()
        )));
    }
    let data = base
        .as_raw()
        .iter()
        .zip(inv_blend.as_raw())
        .map(|(&b, &ib)| dodge_u8(b, ib))
        .collect();
    Ok(base.with_same_shape(data))
}

#[cfg(test)]
#[path = "../../tests/unit/filter/point.rs"]
mod tests;
