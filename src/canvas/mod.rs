//! glint::canvas - pixel buffer and its PPM encoder
//!
//! Public submodules:
//! - color (Color)
//! - ppm (PpmConfig, encode, wrap_row)

pub mod color;
pub mod ppm;

pub use color::Color;
pub use ppm::PpmConfig;

/// Row-major grid of colors with the origin at the top-left corner.
///
/// Writes outside the grid are ignored; reads outside it panic.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Black canvas of `width x height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Every pixel, row by row.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Write one pixel. Coordinates outside the canvas are a no-op.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if self.contains(x, y) {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// # Panics
    /// If `(x, y)` lies outside the canvas.
    #[track_caller]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width, "x = {} is out of bounds for width {}", x, self.width);
        assert!(y < self.height, "y = {} is out of bounds for height {}", y, self.height);
        self.pixels[y * self.width + x]
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// PPM text with the default 70-column line limit.
    pub fn encode(&self) -> String {
        self.encode_with(&PpmConfig::default())
    }

    pub fn encode_with(&self, config: &PpmConfig) -> String {
        ppm::encode(self, config)
    }
}
