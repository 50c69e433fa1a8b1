//! Progress bar.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{ProgressBarPalette, Theme};
use crate::ui::tree::*;
use crate::ui::widget::Widgetable;

use compact_str::format_compact;

/// Symbol of the bar.
pub const BAR_SYMBOL: char = '━';

#[derive(Debug, Clone)]
/// A horizontal bar for value `0..=100`, optionally with the percentage text below it.
pub struct ProgressBar {
  base: InodeBase,
  value: u8,
  show_value: bool,
  palette: ProgressBarPalette,
}

inode_impl!(ProgressBar);

impl ProgressBar {
  pub fn new(shape: IRect, value: u8, theme: &Theme) -> Self {
    ProgressBar {
      base: InodeBase::new(shape),
      value: value.min(100),
      show_value: false,
      palette: theme.progress_bar,
    }
  }

  pub fn value(&self) -> u8 {
    self.value
  }

  /// Set value, it's clamped to `100`.
  pub fn set_value(&mut self, value: u8) {
    self.value = value.min(100);
  }

  pub fn show_value(&self) -> bool {
    self.show_value
  }

  pub fn set_show_value(&mut self, value: bool) {
    self.show_value = value;
  }

  /// Columns of the active part.
  pub fn active_width(&self) -> isize {
    let width = self.shape().width();
    (width as f64 * self.value as f64 / 100.0).round() as isize
  }
}

impl Widgetable for ProgressBar {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let width = actual.width().max(0) as usize;
    let active = self.active_width().max(0) as usize;
    let passive_text: String = std::iter::repeat_n(BAR_SYMBOL, width).collect();
    canvas.draw_text(actual.x(), actual.y(), self.palette.passive, &passive_text);
    let active_text: String = std::iter::repeat_n(BAR_SYMBOL, active.min(width)).collect();
    canvas.draw_text(actual.x(), actual.y(), self.palette.active, &active_text);

    if self.show_value && actual.height() > 1 {
      let text = format_compact!("{}%", self.value);
      let x = actual.x() + (actual.width() - text.len() as isize).div_euclid(2);
      canvas.draw_text(x, actual.y() + 1, self.palette.value, &text);
    }
  }
}
