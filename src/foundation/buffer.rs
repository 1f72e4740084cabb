//! In-memory pixel buffers exchanged between the codec, the transform and the host.
//!
//! Both buffer types share one layout contract:
//!
//! - samples are `u8` in `[0, 255]`
//! - rows are stored top to bottom, pixels left to right, with no row padding
//! - [`ColorImage`] interleaves channels as `R, G, B`, so pixel `(x, y)` starts at byte
//!   `(y * width + x) * 3`
//! - [`GrayImage`] stores one sample per pixel at `y * width + x`
//! - `width >= 1` and `height >= 1`; empty images are rejected at construction
//!
//! Buffers are immutable once built. Every processing stage produces a fresh buffer.

use crate::foundation::error::{SketchError, SketchResult};

/// Channel count of a [`ColorImage`].
pub const COLOR_CHANNELS: u8 = 3;

fn checked_len(width: u32, height: u32, channels: u8) -> SketchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SketchError::validation(format!(
            "image dimensions must be >= 1x1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(usize::from(channels)))
        .ok_or_else(|| SketchError::validation("image buffer size overflow"))
}

/// 3-channel RGB8 image, row-major and channel-interleaved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ColorImage {
    /// Wrap raw interleaved samples.
    ///
    /// `channels` is the caller's claim about the layout of `data`; anything other than 3 fails
    /// with [`SketchError::InvalidInputKind`].
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> SketchResult<Self> {
        if channels != COLOR_CHANNELS {
            return Err(SketchError::invalid_input_kind(channels));
        }
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(SketchError::validation(format!(
                "color buffer expects {expected} bytes for {width}x{height}x3, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y) -> [r, g, b]` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 3],
    ) -> SketchResult<Self> {
        let len = checked_len(width, height, COLOR_CHANNELS)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Interleaved RGB samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its interleaved RGB samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Sample the pixel at `(x, y)`.
    ///
    /// Panics when the coordinates are out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Copy into an `image` crate buffer for encoding or display.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.pixel(x, y)))
    }
}

impl TryFrom<image::RgbImage> for ColorImage {
    type Error = SketchError;

    fn try_from(img: image::RgbImage) -> SketchResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, COLOR_CHANNELS, img.into_raw())
    }
}

impl TryFrom<&image::DynamicImage> for ColorImage {
    type Error = SketchError;

    /// Strict conversion: only 8-bit RGB is accepted, nothing is converted implicitly.
    fn try_from(img: &image::DynamicImage) -> SketchResult<Self> {
        match img {
            image::DynamicImage::ImageRgb8(rgb) => Self::try_from(rgb.clone()),
            other => {
                let color = other.color();
                let channels = color.channel_count();
                if channels != COLOR_CHANNELS {
                    return Err(SketchError::invalid_input_kind(channels));
                }
                Err(SketchError::validation(format!(
                    "expected 8-bit samples, got {color:?}"
                )))
            }
        }
    }
}

/// Single-channel 8-bit image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Wrap raw samples, one per pixel.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> SketchResult<Self> {
        let expected = checked_len(width, height, 1)?;
        if data.len() != expected {
            return Err(SketchError::validation(format!(
                "gray buffer expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> SketchResult<Self> {
        let len = checked_len(width, height, 1)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    // Transform stages derive planes from already validated inputs.
    pub(crate) fn from_plane(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub(crate) fn with_same_shape(&self, data: Vec<u8>) -> Self {
        Self::from_plane(self.width, self.height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Samples in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Sample the pixel at `(x, y)`.
    ///
    /// Panics when the coordinates are out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Copy into an `image` crate buffer for encoding or display.
    pub fn to_luma_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width, self.height, |x, y| image::Luma([self.pixel(x, y)]))
    }
}

impl TryFrom<image::GrayImage> for GrayImage {
    type Error = SketchError;

    fn try_from(img: image::GrayImage) -> SketchResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
