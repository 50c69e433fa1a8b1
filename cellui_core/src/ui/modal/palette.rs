//! Color palette picker.

use crate::evloop::{Event, EventSource, ModalPull, pull_modal};
use crate::prelude::*;
use crate::ui::canvas::{Compositor, RegionGuard, rgb};
use crate::ui::theme::{PickerPalette, Theme};
use crate::ui::tree::shapes;

use crossterm::style::Color;

/// Preset swatches, 8 columns by 4 rows.
pub const PRESET_COLORS: [u32; 32] = [
  0x000000, 0x2D2D2D, 0x4B4B4B, 0x696969, 0x878787, 0xA5A5A5, 0xD2D2D2, 0xFFFFFF,
  0x660000, 0xCC0000, 0xFF4940, 0xFF9280, 0x663300, 0xCC6600, 0xFFB640, 0xFFDB80,
  0x006600, 0x00B640, 0x66DB80, 0xCCFFBF, 0x003366, 0x0049BF, 0x3366CC, 0x99DBFF,
  0x330066, 0x6600CC, 0x9949FF, 0xCCB6FF, 0x660033, 0xCC0066, 0xFF4999, 0xFFB6DB,
];

/// Swatch width in cells.
pub const SWATCH_WIDTH: isize = 3;

#[derive(Debug, Clone)]
/// A grid of preset color swatches inside a bordered box.
pub struct Palette {
  colors: Vec<Color>,
  columns: usize,
  palette: PickerPalette,
}

impl Palette {
  pub fn new(theme: &Theme) -> Self {
    Palette {
      colors: PRESET_COLORS.iter().map(|c| rgb(*c)).collect(),
      columns: 8,
      palette: theme.picker,
    }
  }

  /// Make a palette with custom swatches.
  pub fn with_colors(colors: Vec<Color>, columns: usize, theme: &Theme) -> Self {
    Palette {
      colors,
      columns: columns.max(1),
      palette: theme.picker,
    }
  }

  pub fn colors(&self) -> &[Color] {
    &self.colors
  }

  fn rows(&self) -> usize {
    self.colors.len().div_ceil(self.columns)
  }

  /// The box shape when shown at `(x, y)` on a screen with `screen` size, including the
  /// border.
  pub fn shape_at(&self, x: isize, y: isize, screen: USize) -> IRect {
    let width = self.columns as isize * SWATCH_WIDTH + 2;
    let height = self.rows() as isize + 2;
    shapes::bound_position(&xywh(x, y, width, height), &screen)
  }

  /// The swatch shape of color `index` inside the box `shape`.
  pub fn swatch_shape(&self, shape: &IRect, index: usize) -> IRect {
    let column = (index % self.columns) as isize;
    let row = (index / self.columns) as isize;
    xywh(
      shape.x() + 1 + column * SWATCH_WIDTH,
      shape.y() + 1 + row,
      SWATCH_WIDTH,
      1,
    )
  }

  fn draw(&self, canvas: &mut dyn Compositor, shape: &IRect) {
    let (bg, border) = (self.palette.background, self.palette.border);
    canvas.draw_rectangle(*shape, bg, border, ' ', None);
    let horizontal: String =
      std::iter::repeat_n('─', (shape.width() - 2).max(0) as usize).collect();
    canvas.draw_text(shape.x(), shape.y(), border, &format!("┌{}┐", horizontal));
    canvas.draw_text(
      shape.x(),
      shape.bottom() - 1,
      border,
      &format!("└{}┘", horizontal),
    );
    for y in shape.y() + 1..shape.bottom() - 1 {
      canvas.draw_text(shape.x(), y, border, "│");
      canvas.draw_text(shape.right() - 1, y, border, "│");
    }
    for (i, color) in self.colors.iter().enumerate() {
      canvas.draw_rectangle(self.swatch_shape(shape, i), *color, *color, ' ', None);
    }
  }

  /// Show the palette at `(x, y)`, and block until a swatch is touched or the palette is
  /// dismissed by a touch outside of it.
  pub fn show(
    &self,
    canvas: &mut dyn Compositor,
    events: &mut dyn EventSource,
    x: isize,
    y: isize,
  ) -> Option<Color> {
    let shape = self.shape_at(x, y, canvas.size());
    let mut guard = RegionGuard::new(canvas, shape);
    self.draw(&mut *guard, &shape);
    guard.flip(false);

    loop {
      match pull_modal(events, None) {
        ModalPull::Unwind => return None,
        ModalPull::Timeout => continue,
        ModalPull::Event(Event::Touch { x, y, .. }) => {
          if !shape.contains_xy(x, y) {
            return None;
          }
          let picked = (0..self.colors.len())
            .find(|i| self.swatch_shape(&shape, *i).contains_xy(x, y));
          if let Some(index) = picked {
            debug!("palette picked color {:?}", self.colors[index]);
            return Some(self.colors[index]);
          }
        }
        ModalPull::Event(_) => { /* Skip */ }
      }
    }
  }
}
