//! RGB color used by the canvas.
//!
//! Components are unconstrained `f64`s; only [`Color::to_display_string`]
//! clamps, and only into the `0..=255` sample range of the output format.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Largest sample value written by [`Color::to_display_string`].
pub const MAX_SAMPLE: u8 = 255;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }

    pub fn subtract(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }

    /// Componentwise product.
    pub fn multiply(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }

    pub fn scale(self, scalar: f64) -> Color {
        Color::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }

    /// Components mapped to `0..=255` as `"r g b"`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// The three output samples: `clamp(round(c * 255), 0, 255)`.
    pub fn samples(&self) -> [u8; 3] {
        [to_sample(self.r), to_sample(self.g), to_sample(self.b)]
    }
}

// NaN maps to 0.
fn to_sample(component: f64) -> u8 {
    let max = f64::from(MAX_SAMPLE);
    (component * max).round().clamp(0.0, max) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.samples();
        write!(f, "{} {} {}", r, g, b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::add(self, rhs)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.subtract(rhs)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scalar: f64) -> Color {
        self.scale(scalar)
    }
}
