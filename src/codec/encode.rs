use image::ImageEncoder;

use crate::foundation::buffer::GrayImage;
use crate::foundation::error::{SketchError, SketchResult};

/// File name offered for the sketch download.
pub const DOWNLOAD_FILE_NAME: &str = "artistic_pencil_sketch.png";

/// MIME type of the sketch download.
pub const DOWNLOAD_MIME: &str = "image/png";

/// Encode a grayscale image as a lossless 8-bit PNG.
pub fn encode_png(img: &GrayImage) -> SketchResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e| SketchError::encode(format!("write png: {e}")))?;
    Ok(buf)
}

/// A byte stream offered to the user for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime: &'static str,
    /// Encoded payload.
    pub bytes: Vec<u8>,
}

impl Download {
    /// Wrap PNG bytes under the fixed sketch download name.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            mime: DOWNLOAD_MIME,
            bytes,
        }
    }

    /// Encode `img` and wrap it as the sketch download.
    pub fn sketch(img: &GrayImage) -> SketchResult<Self> {
        Ok(Self::png(encode_png(img)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
