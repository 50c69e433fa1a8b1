//! Screen cell.

use compact_str::{CompactString, ToCompactString};
use crossterm::style::Color;

use crate::ui::canvas::blend;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
/// One character position of the screen: a symbol drawn in a foreground color over a
/// background color.
pub struct Cell {
  symbol: CompactString,
  fg: Color,
  bg: Color,
}

impl Cell {
  pub fn new(symbol: CompactString, fg: Color, bg: Color) -> Self {
    Cell { symbol, fg, bg }
  }

  pub fn with_char(c: char, fg: Color, bg: Color) -> Self {
    Cell::new(c.to_compact_string(), fg, bg)
  }

  /// A blank cell in terminal default colors.
  pub fn space() -> Self {
    Cell::new(CompactString::const_new(" "), Color::Reset, Color::Reset)
  }

  pub fn symbol(&self) -> &CompactString {
    &self.symbol
  }

  pub fn fg(&self) -> Color {
    self.fg
  }

  pub fn bg(&self) -> Color {
    self.bg
  }

  /// Replace everything, as an opaque rectangle does.
  pub fn paint(&mut self, symbol: &CompactString, fg: Color, bg: Color) {
    self.symbol.clone_from(symbol);
    self.fg = fg;
    self.bg = bg;
  }

  /// Write a glyph, keeping the background below it.
  pub fn write(&mut self, c: char, fg: Color) {
    self.symbol = c.to_compact_string();
    self.fg = fg;
  }

  /// Tint both colors toward `color`, the symbol stays.
  ///
  /// See [`blend`] for the meaning of `transparency`.
  pub fn tint(&mut self, color: Color, transparency: f32) {
    self.bg = blend(self.bg, color, transparency);
    self.fg = blend(self.fg, color, transparency);
  }
}

impl Default for Cell {
  fn default() -> Self {
    Cell::space()
  }
}

impl From<char> for Cell {
  fn from(value: char) -> Self {
    Cell::with_char(value, Color::Reset, Color::Reset)
  }
}
