use glint::prelude::*;
use std::fs;

#[test]
fn test_saved_file_matches_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("golden.ppm");
    let canvas = Canvas::filled(15, 2, Color::new(0.77, 0.25, 0.3));

    save_ppm(&canvas, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, canvas.encode().into_bytes());
    assert_eq!(bytes.last(), Some(&b'\n'));
}

#[test]
fn test_saved_file_opens_as_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.ppm");
    let mut canvas = Canvas::new(80, 2);
    canvas.set_pixel(79, 1, Color::GREEN);

    save_ppm(&canvas, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (80, 2));
    assert_eq!(image.get_pixel(79, 1).0, [0, 255, 0]);
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn test_write_to_any_sink() {
    let canvas = Canvas::filled(3, 3, Color::RED);
    let mut sink = std::io::Cursor::new(Vec::new());

    write_ppm(&canvas, &mut sink).unwrap();
    assert_eq!(sink.into_inner(), canvas.encode().into_bytes());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("out.ppm");

    let err = save_ppm(&Canvas::new(2, 2), &path).unwrap_err();
    assert!(matches!(err, ExportError::File { .. }));
    assert!(!path.exists());
}
