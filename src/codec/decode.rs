use anyhow::Context;

use crate::foundation::buffer::ColorImage;
use crate::foundation::error::{SketchError, SketchResult};

/// Upload formats the host accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadFormat {
    /// JPEG (`.jpg`, `.jpeg`).
    Jpeg,
    /// PNG (`.png`).
    Png,
}

impl UploadFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// MIME type of the format.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

/// Sniff the upload format from the leading magic bytes.
pub fn sniff_format(bytes: &[u8]) -> SketchResult<UploadFormat> {
    let format = image::guess_format(bytes)
        .map_err(|e| SketchError::decode(format!("unrecognized image data: {e}")))?;
    UploadFormat::from_image_format(format)
        .ok_or_else(|| SketchError::decode(format!("unsupported image format {format:?}")))
}

/// Decode JPEG or PNG bytes into the RGB8 buffer the transform consumes.
///
/// Gray, alpha and 16-bit images are normalised to 8-bit RGB; alpha is dropped.
pub fn decode_upload(bytes: &[u8]) -> SketchResult<ColorImage> {
    let format = sniff_format(bytes)?;
    let dyn_img = image::load_from_memory_with_format(bytes, format.image_format())
        .context("decode image from memory")
        .map_err(|e| SketchError::decode(format!("{e:#}")))?;
    tracing::debug!(?format, color = ?dyn_img.color(), "decoded upload");
    ColorImage::try_from(dyn_img.into_rgb8())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
