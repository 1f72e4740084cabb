use crate::foundation::buffer::{ColorImage, GrayImage};

// BT.601 luma weights (0.299, 0.587, 0.114) in 14-bit fixed point; they sum to 1 << 14.
const LUMA_R_Q14: u32 = 4899;
const LUMA_G_Q14: u32 = 9617;
const LUMA_B_Q14: u32 = 1868;
const Q14_SHIFT: u32 = 14;
const Q14_HALF: u32 = 1 << (Q14_SHIFT - 1);

/// Collapse an RGB triple into one luma sample, rounding to nearest.
pub fn luma_u8(rgb: [u8; 3]) -> u8 {
    let acc = LUMA_R_Q14 * u32::from(rgb[0])
        + LUMA_G_Q14 * u32::from(rgb[1])
        + LUMA_B_Q14 * u32::from(rgb[2]);
    ((acc + Q14_HALF) >> Q14_SHIFT) as u8
}

/// Grayscale plane of `img`, same width and height.
pub fn to_luma(img: &ColorImage) -> GrayImage {
    let data: Vec<u8> = img
        .as_raw()
        .chunks_exact(3)
        .map(|px| luma_u8([px[0], px[1], px[2]]))
        .collect();
    GrayImage::from_plane(img.width(), img.height(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/luma.rs"]
mod tests;
