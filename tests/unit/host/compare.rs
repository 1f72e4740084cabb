use super::*;

#[test]
fn layout_places_original_gutter_and_sketch() {
    let original = ColorImage::from_fn(3, 2, |_, _| [200, 10, 10]).unwrap();
    let sketch = GrayImage::from_fn(3, 2, |x, _| x as u8 * 50).unwrap();

    let canvas = side_by_side(&original, &sketch, 2, [1, 2, 3]).unwrap();
    assert_eq!(canvas.dimensions(), (8, 2));
    assert_eq!(canvas.get_pixel(2, 1).0, [200, 10, 10]);
    assert_eq!(canvas.get_pixel(3, 0).0, [1, 2, 3]);
    assert_eq!(canvas.get_pixel(4, 1).0, [1, 2, 3]);
    assert_eq!(canvas.get_pixel(5, 0).0, [0, 0, 0]);
    assert_eq!(canvas.get_pixel(7, 1).0, [100, 100, 100]);
}

#[test]
fn zero_gutter_abuts_images() {
    let original = ColorImage::from_fn(1, 1, |_, _| [9, 9, 9]).unwrap();
    let sketch = GrayImage::from_raw(1, 1, vec![255]).unwrap();
    let canvas = side_by_side(&original, &sketch, 0, [0, 0, 0]).unwrap();
    assert_eq!(canvas.dimensions(), (2, 1));
    assert_eq!(canvas.get_pixel(1, 0).0, [255, 255, 255]);
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let original = ColorImage::from_fn(2, 2, |_, _| [0, 0, 0]).unwrap();
    let sketch = GrayImage::from_raw(1, 1, vec![0]).unwrap();
    assert!(side_by_side(&original, &sketch, 4, [0, 0, 0]).is_err());
}
