//! Canvas.
//!
//! The [`Compositor`] trait is the screen-buffer contract all widgets draw through. The
//! real screen backend is provided by the host, the [`Canvas`] here is the in-memory
//! double-buffered implementation: widgets draw on the current frame, and
//! [`flip`](Compositor::flip) publishes it as the screen frame.

use crate::prelude::*;

// Re-export
pub use frame::cell::*;
pub use frame::*;
pub use picture::*;

use compact_str::ToCompactString;
use crossterm::style::Color;
use std::ops::{Deref, DerefMut};

pub mod frame;
pub mod picture;


/// Make a 24-bit color from `0xRRGGBB`.
pub fn rgb(hex: u32) -> Color {
  Color::Rgb {
    r: ((hex >> 16) & 0xFF) as u8,
    g: ((hex >> 8) & 0xFF) as u8,
    b: (hex & 0xFF) as u8,
  }
}

/// Blend `above` color over `below` color.
///
/// The `transparency` is in `[0.0, 1.0]`, `0.0` means `above` is fully opaque. Only 24-bit
/// colors can be mixed, other colors simply pick the dominant one.
pub fn blend(below: Color, above: Color, transparency: f32) -> Color {
  let t = transparency.clamp(0.0, 1.0);
  match (below, above) {
    (
      Color::Rgb {
        r: r1,
        g: g1,
        b: b1,
      },
      Color::Rgb {
        r: r2,
        g: g2,
        b: b2,
      },
    ) => {
      let mix = |lo: u8, hi: u8| -> u8 {
        (hi as f32 * (1.0 - t) + lo as f32 * t).round() as u8
      };
      Color::Rgb {
        r: mix(r1, r2),
        g: mix(g1, g2),
        b: mix(b1, b2),
      }
    }
    _ => {
      if t < 0.5 {
        above
      } else {
        below
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A copied screen region.
pub struct Snapshot {
  shape: IRect,
  cells: Vec<Cell>,
}

impl Snapshot {
  /// The copied region, already clipped by the screen.
  pub fn shape(&self) -> IRect {
    self.shape
  }

  pub fn cells(&self) -> &[Cell] {
    &self.cells
  }
}

/// The screen-buffer contract.
///
/// Drawing primitives respect the current draw limit (clip rectangle), snapshots don't:
/// [`copy`](Compositor::copy) and [`paste`](Compositor::paste) always work on exact screen
/// content.
pub trait Compositor {
  /// Screen size.
  fn size(&self) -> USize;

  /// Fill a rectangle. With `transparency` the colors are blended over the existing cells
  /// and their symbols are kept.
  fn draw_rectangle(
    &mut self,
    shape: IRect,
    bg: Color,
    fg: Color,
    symbol: char,
    transparency: Option<f32>,
  );

  /// Draw a line of text, the background colors are kept.
  fn draw_text(&mut self, x: isize, y: isize, fg: Color, text: &str);

  /// Draw a picture with its top-left at `(x, y)`, transparent pixels are skipped.
  fn draw_picture(&mut self, x: isize, y: isize, picture: &Picture);

  /// Copy a screen region.
  fn copy(&self, shape: IRect) -> Snapshot;

  /// Paste a copied region back to where it was copied from.
  fn paste(&mut self, snapshot: &Snapshot);

  /// Current draw limit.
  fn draw_limit(&self) -> IRect;

  /// Set the draw limit, it's always clipped by the screen.
  fn set_draw_limit(&mut self, shape: IRect);

  /// Reset the draw limit to the whole screen.
  fn reset_draw_limit(&mut self);

  /// Publish the drawn content to screen. With `force` the whole screen is repainted,
  /// otherwise only the changed cells are.
  fn flip(&mut self, force: bool);

  /// The whole screen shape.
  fn shape(&self) -> IRect {
    let size = self.size();
    xywh(0, 0, size.width() as isize, size.height() as isize)
  }
}

/// Scoped screen region snapshot.
///
/// It copies a region when created, and pastes it back (then flips) when dropped, so the
/// screen is restored even if a modal loop exits abnormally. The draw limit is reset to the
/// whole screen while the guard lives, and restored on drop as well.
pub struct RegionGuard<'a> {
  canvas: &'a mut dyn Compositor,
  snapshot: Snapshot,
  limit: IRect,
}

impl<'a> RegionGuard<'a> {
  pub fn new(canvas: &'a mut dyn Compositor, shape: IRect) -> Self {
    let limit = canvas.draw_limit();
    canvas.reset_draw_limit();
    let snapshot = canvas.copy(shape);
    trace!("region guard copies {:?}", snapshot.shape());
    RegionGuard {
      canvas,
      snapshot,
      limit,
    }
  }

  pub fn snapshot(&self) -> &Snapshot {
    &self.snapshot
  }
}

impl<'a> Deref for RegionGuard<'a> {
  type Target = dyn Compositor + 'a;

  fn deref(&self) -> &Self::Target {
    &*self.canvas
  }
}

impl<'a> DerefMut for RegionGuard<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut *self.canvas
  }
}

impl Drop for RegionGuard<'_> {
  fn drop(&mut self) {
    trace!("region guard pastes {:?}", self.snapshot.shape());
    self.canvas.paste(&self.snapshot);
    self.canvas.set_draw_limit(self.limit);
    self.canvas.flip(false);
  }
}

#[derive(Debug, Clone)]
/// In-memory double-buffered canvas.
///
/// It manages both the current frame (drawn by widgets) and the screen frame (the last
/// flipped content).
///
/// NOTE: APIs named without `screen` are current frame.
pub struct Canvas {
  frame: Frame,
  screen: Frame,
  limit: IRect,
  flips: usize,
  last_flip_changes: usize,
}

impl Canvas {
  /// Make new canvas with screen size.
  pub fn new(size: USize) -> Self {
    let frame = Frame::new(size);
    let limit = frame.shape();
    Canvas {
      screen: frame.clone(),
      frame,
      limit,
      flips: 0,
      last_flip_changes: 0,
    }
  }

  /// Get current frame.
  pub fn frame(&self) -> &Frame {
    &self.frame
  }

  /// Get the screen frame, i.e. the last flipped content.
  pub fn screen(&self) -> &Frame {
    &self.screen
  }

  /// How many times the canvas flipped.
  pub fn flips(&self) -> usize {
    self.flips
  }

  /// How many cells were repainted by the last flip.
  pub fn last_flip_changes(&self) -> usize {
    self.last_flip_changes
  }

  fn clipped(&self, shape: IRect) -> Option<IRect> {
    self.limit.intersect(&shape)
  }
}

impl Compositor for Canvas {
  fn size(&self) -> USize {
    self.frame.size()
  }

  fn draw_rectangle(
    &mut self,
    shape: IRect,
    bg: Color,
    fg: Color,
    symbol: char,
    transparency: Option<f32>,
  ) {
    let shape = match self.clipped(shape) {
      Some(shape) => shape,
      None => return,
    };
    let symbol = symbol.to_compact_string();
    for y in shape.y()..shape.bottom() {
      for x in shape.x()..shape.right() {
        if let Some(cell) = self.frame.get_cell_mut(x, y) {
          match transparency {
            Some(t) => cell.tint(bg, t),
            None => cell.paint(&symbol, fg, bg),
          }
        }
      }
    }
  }

  fn draw_text(&mut self, x: isize, y: isize, fg: Color, text: &str) {
    if y < self.limit.y() || y >= self.limit.bottom() {
      return;
    }
    for (i, c) in text.chars().enumerate() {
      let cx = x + i as isize;
      if cx >= self.limit.right() {
        break;
      }
      if cx < self.limit.x() {
        continue;
      }
      if let Some(cell) = self.frame.get_cell_mut(cx, y) {
        cell.write(c, fg);
      }
    }
  }

  fn draw_picture(&mut self, x: isize, y: isize, picture: &Picture) {
    let size = picture.size();
    for py in 0..size.height() {
      for px in 0..size.width() {
        let (cx, cy) = (x + px as isize, y + py as isize);
        if !self.limit.contains_xy(cx, cy) {
          continue;
        }
        if let Some(Some(pixel)) = picture.get(px, py) {
          self.frame.set_cell(cx, cy, pixel.clone());
        }
      }
    }
  }

  fn copy(&self, shape: IRect) -> Snapshot {
    match self.frame.shape().intersect(&shape) {
      Some(shape) => {
        let mut cells = Vec::with_capacity(
          shape.width() as usize * shape.height() as usize,
        );
        for y in shape.y()..shape.bottom() {
          for x in shape.x()..shape.right() {
            if let Some(cell) = self.frame.get_cell(x, y) {
              cells.push(cell.clone());
            }
          }
        }
        Snapshot { shape, cells }
      }
      None => Snapshot {
        shape: xywh(shape.x(), shape.y(), 0, 0),
        cells: vec![],
      },
    }
  }

  fn paste(&mut self, snapshot: &Snapshot) {
    let shape = snapshot.shape();
    let mut cells = snapshot.cells().iter();
    for y in shape.y()..shape.bottom() {
      for x in shape.x()..shape.right() {
        if let Some(cell) = cells.next() {
          self.frame.set_cell(x, y, cell.clone());
        }
      }
    }
  }

  fn draw_limit(&self) -> IRect {
    self.limit
  }

  fn set_draw_limit(&mut self, shape: IRect) {
    self.limit = self
      .frame
      .shape()
      .intersect(&shape)
      .unwrap_or_else(|| xywh(shape.x(), shape.y(), 0, 0));
  }

  fn reset_draw_limit(&mut self) {
    self.limit = self.frame.shape();
  }

  fn flip(&mut self, force: bool) {
    let changes = if force {
      self.frame.cells().len()
    } else {
      self
        .frame
        .cells()
        .iter()
        .zip(self.screen.cells().iter())
        .filter(|(a, b)| a != b)
        .count()
    };
    self.screen.clone_from(&self.frame);
    self.flips += 1;
    self.last_flip_changes = changes;
    trace!("flip, force:{:?}, changes:{:?}", force, changes);
  }
}
