use super::*;

#[test]
fn load_png_preserves_pixels_and_size() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("buddy-intro-1.png");

    let mut img = RgbaImage::new(4, 6);
    img.put_pixel(3, 5, image::Rgba([10, 20, 30, 40]));
    img.save(&path).unwrap();

    let sheet = load_source(&path, FrameSize::new(4, 6)).unwrap();
    assert_eq!(sheet.size(), FrameSize::new(4, 6));
    assert_eq!(sheet.image.get_pixel(3, 5).0, [10, 20, 30, 40]);
    assert_eq!(sheet.file_name(), "buddy-intro-1.png");
    assert!(sheet.size_mismatch().is_none());
}

#[test]
fn mismatch_reports_both_sizes() {
    let sheet = SourceSheet::from_image(
        "assets/buddy-intro-2.png",
        FrameSize::new(640, 1738),
        RgbaImage::new(640, 1739),
    );
    let mismatch = sheet.size_mismatch().unwrap();
    assert_eq!(mismatch.actual, FrameSize::new(640, 1739));
    assert_eq!(
        mismatch.to_string(),
        "buddy-intro-2.png is 640x1739, expected 640x1738"
    );
}

#[test]
fn corrupt_file_is_image_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("buddy-intro-1.png");
    std::fs::write(&path, b"not a png").unwrap();

    let err = load_source(&path, FrameSize::new(640, 1738)).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::SpritePackError::Image(_)
    ));
}

#[test]
fn format_is_detected_from_contents_not_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("buddy-intro-1.png");

    let mut jpeg = Vec::new();
    image::RgbImage::from_pixel(16, 24, image::Rgb([128, 128, 128]))
        .write_to(&mut std::io::Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
        .unwrap();
    std::fs::write(&path, &jpeg).unwrap();

    let sheet = load_source(&path, FrameSize::new(16, 24)).unwrap();
    assert_eq!(sheet.size(), FrameSize::new(16, 24));
    assert!(sheet.size_mismatch().is_none());
}

#[test]
fn missing_file_is_io_error_with_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("buddy-intro-9.png");

    let err = load_source(&path, FrameSize::new(640, 1738)).unwrap_err();
    assert!(matches!(err, SpritePackError::Io { .. }));
    assert!(err.to_string().contains("buddy-intro-9.png"));
}
