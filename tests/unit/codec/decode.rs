use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn extension_mapping_is_case_insensitive() {
    assert_eq!(UploadFormat::from_extension("JPG"), Some(UploadFormat::Jpeg));
    assert_eq!(UploadFormat::from_extension("jpeg"), Some(UploadFormat::Jpeg));
    assert_eq!(UploadFormat::from_extension("Png"), Some(UploadFormat::Png));
    assert_eq!(UploadFormat::from_extension("gif"), None);
    assert_eq!(UploadFormat::Png.mime(), "image/png");
    assert_eq!(UploadFormat::Jpeg.mime(), "image/jpeg");
}

#[test]
fn decode_png_rgb_is_exact() {
    let src = image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 40, y as u8 * 90, 7]));
    let bytes = encode(image::DynamicImage::ImageRgb8(src.clone()), image::ImageFormat::Png);

    let img = decode_upload(&bytes).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.as_raw(), src.as_raw().as_slice());
}

#[test]
fn decode_normalises_alpha_and_gray_to_rgb() {
    let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
    let img = decode_upload(&encode(
        image::DynamicImage::ImageRgba8(rgba),
        image::ImageFormat::Png,
    ))
    .unwrap();
    assert_eq!(img.pixel(1, 1), [10, 20, 30]);

    let gray = image::GrayImage::from_pixel(2, 1, image::Luma([77]));
    let img = decode_upload(&encode(
        image::DynamicImage::ImageLuma8(gray),
        image::ImageFormat::Png,
    ))
    .unwrap();
    assert_eq!(img.pixel(0, 0), [77, 77, 77]);
}

#[test]
fn decode_jpeg_keeps_dimensions() {
    let src = image::RgbImage::from_pixel(16, 9, image::Rgb([120, 60, 30]));
    let bytes = encode(image::DynamicImage::ImageRgb8(src), image::ImageFormat::Jpeg);
    assert_eq!(sniff_format(&bytes).unwrap(), UploadFormat::Jpeg);

    let img = decode_upload(&bytes).unwrap();
    assert_eq!(img.dimensions(), (16, 9));
}

#[test]
fn unsupported_and_corrupt_uploads_are_decode_errors() {
    assert!(matches!(
        decode_upload(b"GIF89a\x01\x00\x01\x00"),
        Err(SketchError::Decode(_))
    ));
    assert!(matches!(
        decode_upload(b"definitely not an image"),
        Err(SketchError::Decode(_))
    ));

    let src = image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
    let bytes = encode(image::DynamicImage::ImageRgb8(src), image::ImageFormat::Png);
    let truncated = &bytes[..bytes.len() / 2];
    assert!(matches!(
        decode_upload(truncated),
        Err(SketchError::Decode(_))
    ));
}
