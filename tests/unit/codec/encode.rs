use super::*;

#[test]
fn png_round_trip_is_lossless() {
    let img = GrayImage::from_fn(7, 3, |x, y| (x * 31 + y * 17) as u8).unwrap();
    let bytes = encode_png(&img).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::L8);
    let back = GrayImage::try_from(decoded.into_luma8()).unwrap();
    assert_eq!(back, img);
}

#[test]
fn download_uses_fixed_name_and_mime() {
    let img = GrayImage::from_raw(1, 1, vec![200]).unwrap();
    let dl = Download::sketch(&img).unwrap();
    assert_eq!(dl.file_name, "artistic_pencil_sketch.png");
    assert_eq!(dl.mime, "image/png");
    assert_eq!(dl.bytes, encode_png(&img).unwrap());
}
