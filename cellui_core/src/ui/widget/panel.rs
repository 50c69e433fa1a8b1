//! Panel.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::Theme;
use crate::ui::tree::*;
use crate::ui::widget::Widgetable;

use crossterm::style::Color;

#[derive(Debug, Clone)]
/// Filled rectangle. A transparent panel blends its color over what is below it.
pub struct Panel {
  base: InodeBase,
  background: Color,
  transparency: Option<f32>,
}

inode_impl!(Panel);

impl Panel {
  pub fn new(shape: IRect, theme: &Theme) -> Self {
    Panel {
      base: InodeBase::new(shape),
      background: theme.panel.background,
      transparency: None,
    }
  }

  pub fn background(&self) -> Color {
    self.background
  }

  pub fn set_background(&mut self, color: Color) {
    self.background = color;
  }

  pub fn transparency(&self) -> Option<f32> {
    self.transparency
  }

  /// Set transparency in `[0.0, 1.0]`, `None` means opaque.
  pub fn set_transparency(&mut self, transparency: Option<f32>) {
    self.transparency = transparency.map(|t| t.clamp(0.0, 1.0));
  }
}

impl Widgetable for Panel {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    canvas.draw_rectangle(
      *self.actual_shape(),
      self.background,
      self.background,
      ' ',
      self.transparency,
    );
  }
}
