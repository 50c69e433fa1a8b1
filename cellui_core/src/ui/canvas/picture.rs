//! Picture, the pixel data of the image widget.

use crate::prelude::*;
use crate::ui::canvas::frame::cell::Cell;

use crossterm::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A grid of cells, `None` cells are transparent.
pub struct Picture {
  size: USize,
  pixels: Vec<Option<Cell>>,
}

impl Picture {
  /// Make a picture filled with `fill`.
  pub fn new(width: usize, height: usize, fill: Option<Cell>) -> Self {
    Picture {
      size: USize::new(width, height),
      pixels: vec![fill; width * height],
    }
  }

  /// Make a picture from text rows, spaces are transparent.
  pub fn from_rows(rows: &[&str], fg: Color, bg: Color) -> Self {
    let height = rows.len();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut picture = Picture::new(width, height, None);
    for (y, row) in rows.iter().enumerate() {
      for (x, c) in row.chars().enumerate() {
        if c != ' ' {
          picture.set(x, y, Some(Cell::with_char(c, fg, bg)));
        }
      }
    }
    picture
  }

  pub fn size(&self) -> USize {
    self.size
  }

  /// Get a pixel, `None` if the position is outside of the picture.
  pub fn get(&self, x: usize, y: usize) -> Option<&Option<Cell>> {
    if x < self.size.width() && y < self.size.height() {
      self.pixels.get(y * self.size.width() + x)
    } else {
      None
    }
  }

  /// Set a pixel, returns `false` if the position is outside of the picture.
  pub fn set(&mut self, x: usize, y: usize, pixel: Option<Cell>) -> bool {
    if x < self.size.width() && y < self.size.height() {
      self.pixels[y * self.size.width() + x] = pixel;
      true
    } else {
      false
    }
  }
}

/// Picture assets lookup, provided by the host.
pub trait ImageSource {
  /// Find a picture by name.
  fn picture(&self, name: &str) -> Option<Picture>;
}

impl ImageSource for HashMap<String, Picture> {
  fn picture(&self, name: &str) -> Option<Picture> {
    self.get(name).cloned()
  }
}
