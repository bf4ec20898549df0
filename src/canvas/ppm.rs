//! Plain-text PPM (`P3`) encoding.
//!
//! The format caps lines at 70 characters. Rows longer than that are
//! re-wrapped: scanning the row text, every index that is a multiple of the
//! wrap column arms a break, and the next space after an armed break is
//! written as a newline. With samples of at most three digits a wrap column
//! of 67 keeps every line within the cap.

use std::fmt::Write as _;

use tracing::trace;

use super::color::MAX_SAMPLE;
use super::Canvas;

/// Magic number of the plain-text RGB variant.
pub const MAGIC: &str = "P3";

/// Widest sample text, `"255"`.
pub const SAMPLE_WIDTH: usize = 3;

/// Line-length settings for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmConfig {
    max_line_width: usize,
    wrap_column: usize,
}

impl Default for PpmConfig {
    /// 70-character lines, breaks armed every 67 characters.
    fn default() -> Self {
        Self {
            max_line_width: 70,
            wrap_column: 67,
        }
    }
}

impl PpmConfig {
    /// A break armed at `wrap_column` lands at most one sample later, so
    /// lines stay within `max_line_width` as long as a full sample fits
    /// after the wrap column.
    ///
    /// # Panics
    /// If `wrap_column` is zero or `wrap_column + SAMPLE_WIDTH` exceeds
    /// `max_line_width`.
    #[track_caller]
    pub fn new(max_line_width: usize, wrap_column: usize) -> Self {
        assert!(wrap_column > 0, "wrap column must be positive");
        assert!(
            wrap_column + SAMPLE_WIDTH <= max_line_width,
            "wrap column {} leaves no room for a {}-digit sample within {} columns",
            wrap_column,
            SAMPLE_WIDTH,
            max_line_width
        );
        Self {
            max_line_width,
            wrap_column,
        }
    }

    /// Rows up to this many characters are written unchanged.
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    pub fn wrap_column(&self) -> usize {
        self.wrap_column
    }
}

/// Encode the whole canvas: header, then one (possibly wrapped) block per
/// row. The result always ends with exactly one newline.
pub fn encode(canvas: &Canvas, config: &PpmConfig) -> String {
    let (width, height) = (canvas.width(), canvas.height());
    let mut out = String::with_capacity(16 + width * height * 12);
    // Writing into a String cannot fail.
    let _ = write!(out, "{}\n{} {}\n{}\n", MAGIC, width, height, MAX_SAMPLE);
    if width == 0 {
        return out;
    }

    let mut row_text = String::with_capacity(width * 12);
    for (y, row) in canvas.pixels().chunks(width).enumerate() {
        row_text.clear();
        for (x, color) in row.iter().enumerate() {
            if x > 0 {
                row_text.push(' ');
            }
            let _ = write!(row_text, "{}", color);
        }
        trace!(row = y, len = row_text.len(), "encoded ppm row");
        wrap_row(&row_text, config, &mut out);
        out.push('\n');
    }
    out
}

/// Append `row` to `out`, replacing spaces with newlines where needed to
/// respect `config`'s line width. Rows that already fit are copied as is.
pub fn wrap_row(row: &str, config: &PpmConfig, out: &mut String) {
    if row.chars().count() <= config.max_line_width {
        out.push_str(row);
        return;
    }

    let mut break_armed = false;
    for (i, c) in row.chars().enumerate() {
        if i > 0 && i % config.wrap_column == 0 {
            break_armed = true;
        }
        if break_armed && c == ' ' {
            out.push('\n');
            break_armed = false;
        } else {
            out.push(c);
        }
    }
}
