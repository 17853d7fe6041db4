mod common;

use common::{two_tone_png, BASIC_TABLE, CANVAS};
use lib_detect::{load_image, load_image_from_bytes, DisplayGeometry, LoadError, Palette, Rgb};

#[test]
fn test_decode_resize_and_center() {
    let loaded = load_image_from_bytes(&two_tone_png(), CANVAS).unwrap();

    assert_eq!(loaded.original_size(), (20, 10));
    assert_eq!(
        loaded.geometry(),
        DisplayGeometry {
            offset_x: 0,
            offset_y: 100,
            width: 800,
            height: 400
        }
    );
    assert_eq!(loaded.pixels().dimensions(), (800, 400));
}

#[test]
fn test_click_to_color_name() {
    let palette = Palette::parse(BASIC_TABLE).unwrap();
    let loaded = load_image_from_bytes(&two_tone_png(), CANVAS).unwrap();

    let left = loaded.sample(100.0, 300.0).unwrap();
    assert_eq!(left, Rgb::new(255, 0, 0));
    assert_eq!(palette.nearest(left).entry.name, "Red");

    let right = loaded.sample(700.0, 300.0).unwrap();
    assert_eq!(palette.nearest(right).entry.name, "Navy");

    // Letterbox area above the image.
    assert_eq!(loaded.sample(100.0, 20.0), None);
}

#[test]
fn test_corrupt_bytes() {
    let result = load_image_from_bytes(b"definitely not a png", CANVAS);
    assert!(matches!(result, Err(LoadError::DecodeBytes(_))));
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("lib-detect-missing-image.png");
    let result = load_image(&path, CANVAS);
    assert!(matches!(result, Err(LoadError::Decode { .. })));
}

#[test]
fn test_load_from_path_records_path() {
    let path = std::env::temp_dir().join(format!("lib-detect-{}.png", std::process::id()));
    std::fs::write(&path, two_tone_png()).unwrap();

    let loaded = load_image(&path, CANVAS);
    std::fs::remove_file(&path).unwrap();

    let loaded = loaded.unwrap();
    assert_eq!(loaded.path(), Some(path.as_path()));
    assert_eq!(loaded.original_size(), (20, 10));
}
