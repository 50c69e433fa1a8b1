//! Canvas utils for testing.
//!
//! NOTE: This module should only be used in unit tests, not some where else.

use crate::size;
use crate::ui::canvas::Canvas;

use compact_str::CompactString;

/// Make an in-memory canvas with `width` columns and `height` rows.
pub fn make_canvas(width: usize, height: usize) -> Canvas {
  Canvas::new(size!(width, height))
}

/// Symbols of the current frame, one string per row.
pub fn symbols(canvas: &Canvas) -> Vec<CompactString> {
  canvas.frame().raw_symbols()
}

/// Symbols of a row segment in the current frame.
pub fn row_symbols(canvas: &Canvas, y: usize, x: usize, n: usize) -> String {
  symbols(canvas)[y].chars().skip(x).take(n).collect()
}
