//! Container, the plain parent of other widgets.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::tree::*;
use crate::ui::widget::Widgetable;

use crossterm::style::Color;

#[derive(Debug, Clone)]
/// A container that owns children and optionally fills its background.
pub struct Container {
  base: InodeBase,
  background: Option<Color>,
}

inode_impl!(Container);

impl Container {
  pub fn new(shape: IRect) -> Self {
    Container {
      base: InodeBase::new(shape),
      background: None,
    }
  }

  pub fn background(&self) -> Option<Color> {
    self.background
  }

  pub fn set_background(&mut self, background: Option<Color>) {
    self.background = background;
  }
}

impl Widgetable for Container {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    if let Some(bg) = self.background {
      canvas.draw_rectangle(*self.actual_shape(), bg, bg, ' ', None);
    }
  }
}
