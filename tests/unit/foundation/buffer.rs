use super::*;

#[test]
fn color_from_raw_rejects_wrong_channel_count() {
    let err = ColorImage::from_raw(2, 1, 4, vec![0u8; 8]).unwrap_err();
    assert!(matches!(err, SketchError::InvalidInputKind { channels: 4 }));

    let err = ColorImage::from_raw(2, 1, 1, vec![0u8; 2]).unwrap_err();
    assert!(matches!(err, SketchError::InvalidInputKind { channels: 1 }));
}

#[test]
fn color_from_raw_rejects_length_mismatch_and_empty() {
    assert!(matches!(
        ColorImage::from_raw(2, 2, 3, vec![0u8; 11]),
        Err(SketchError::Validation(_))
    ));
    assert!(matches!(
        ColorImage::from_raw(0, 2, 3, vec![]),
        Err(SketchError::Validation(_))
    ));
    assert!(matches!(
        GrayImage::from_raw(3, 0, vec![]),
        Err(SketchError::Validation(_))
    ));
}

#[test]
fn color_layout_is_row_major_interleaved() {
    let img = ColorImage::from_fn(3, 2, |x, y| [x as u8, y as u8, 7]).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.pixel(2, 1), [2, 1, 7]);
    // (x=1, y=1) -> (1 * 3 + 1) * 3
    assert_eq!(&img.as_raw()[12..15], &[1, 1, 7]);
}

#[test]
fn gray_layout_is_row_major() {
    let img = GrayImage::from_fn(4, 2, |x, y| (y * 4 + x) as u8).unwrap();
    assert_eq!(img.as_raw(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(img.pixel(1, 1), 5);
}

#[test]
fn image_crate_conversions_preserve_pixels() {
    let color = ColorImage::from_fn(2, 2, |x, y| [10 * x as u8, 20 * y as u8, 30]).unwrap();
    let back = ColorImage::try_from(color.to_rgb_image()).unwrap();
    assert_eq!(back, color);

    let gray = GrayImage::from_fn(3, 1, |x, _| 100 + x as u8).unwrap();
    let back = GrayImage::try_from(gray.to_luma_image()).unwrap();
    assert_eq!(back, gray);
}

#[test]
fn dynamic_image_conversion_is_strict() {
    let rgb = image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
    assert!(ColorImage::try_from(&rgb).is_ok());

    let rgba = image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2));
    assert!(matches!(
        ColorImage::try_from(&rgba),
        Err(SketchError::InvalidInputKind { channels: 4 })
    ));

    let luma = image::DynamicImage::ImageLuma8(image::GrayImage::new(2, 2));
    assert!(matches!(
        ColorImage::try_from(&luma),
        Err(SketchError::InvalidInputKind { channels: 1 })
    ));

    let rgb16 = image::DynamicImage::ImageRgb16(image::ImageBuffer::new(2, 2));
    assert!(matches!(
        ColorImage::try_from(&rgb16),
        Err(SketchError::Validation(_))
    ));
}
