use glint::prelude::*;
use image::ImageFormat;

const ROW_LINES: &str = "\
196 64 77 196 64 77 196 64 77 196 64 77 196 64 77 196 64 77 196 64 77
196 64 77 196 64 77 196 64 77 196 64 77 196 64 77 196 64 77 196 64
77 196 64 77
";

fn decode(ppm: &str) -> image::RgbImage {
    image::load_from_memory_with_format(ppm.as_bytes(), ImageFormat::Pnm)
        .expect("encoder output should be valid PPM")
        .to_rgb8()
}

#[test]
fn test_filled_canvas_matches_golden_text() {
    let canvas = Canvas::filled(15, 2, Color::new(0.77, 0.25, 0.3));
    let expected = format!("P3\n15 2\n255\n{ROW_LINES}{ROW_LINES}");
    assert_eq!(canvas.encode(), expected);
}

#[test]
fn test_fill_after_construction_matches_filled() {
    let mut canvas = Canvas::new(15, 2);
    canvas.fill(Color::new(0.77, 0.25, 0.3));
    assert_eq!(canvas, Canvas::filled(15, 2, Color::new(0.77, 0.25, 0.3)));
}

#[test]
fn test_wrapped_lines_are_sample_lists() {
    let canvas = Canvas::filled(40, 3, Color::WHITE);
    let ppm = canvas.encode();

    assert!(ppm.ends_with('\n') && !ppm.ends_with("\n\n"));
    for line in ppm.lines().skip(3) {
        assert!(line.len() <= 70, "line too long: {line:?}");
        assert!(!line.is_empty());
        assert!(line.split(' ').all(|s| s.parse::<u8>().is_ok()), "bad line: {line:?}");
    }

    let samples: usize = ppm.lines().skip(3).map(|l| l.split(' ').count()).sum();
    assert_eq!(samples, 40 * 3 * 3);
}

#[test]
fn test_wrapped_output_decodes_to_same_pixels() {
    let mut canvas = Canvas::filled(15, 2, Color::new(0.77, 0.25, 0.3));
    canvas.set_pixel(14, 1, Color::BLUE);
    canvas.set_pixel(0, 1, Color::new(2.0, -1.0, 0.5));

    let image = decode(&canvas.encode());
    assert_eq!(image.dimensions(), (15, 2));
    assert_eq!(image.get_pixel(3, 0).0, [196, 64, 77]);
    assert_eq!(image.get_pixel(14, 1).0, [0, 0, 255]);
    assert_eq!(image.get_pixel(0, 1).0, [255, 0, 128]);
}

#[test]
fn test_every_pixel_survives_decoding() {
    let mut canvas = Canvas::new(30, 7);
    for y in 0..7 {
        for x in 0..30 {
            canvas.set_pixel(x, y, Color::new(x as f64 / 29.0, y as f64 / 6.0, 0.5));
        }
    }

    let image = decode(&canvas.encode());
    for (x, y, pixel) in image.enumerate_pixels() {
        assert_eq!(pixel.0, canvas.get_pixel(x as usize, y as usize).samples());
    }
}

#[test]
fn test_out_of_bounds_writes_leave_buffer_unchanged() {
    let mut canvas = Canvas::new(10, 20);
    canvas.set_pixel(2, 3, Color::RED);
    let before: Vec<Color> = (0..20)
        .flat_map(|y| (0..10).map(move |x| (x, y)))
        .map(|(x, y)| canvas.get_pixel(x, y))
        .collect();

    canvas.set_pixel(10, 0, Color::GREEN);
    canvas.set_pixel(0, 20, Color::GREEN);
    canvas.set_pixel(10, 20, Color::GREEN);

    let after: Vec<Color> = (0..20)
        .flat_map(|y| (0..10).map(move |x| (x, y)))
        .map(|(x, y)| canvas.get_pixel(x, y))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_custom_line_width() {
    let canvas = Canvas::filled(10, 1, Color::WHITE);
    let ppm = canvas.encode_with(&PpmConfig::new(20, 16));

    assert!(ppm.lines().skip(3).all(|line| line.len() <= 20));
    assert_eq!(decode(&ppm).get_pixel(9, 0).0, [255, 255, 255]);
}
