//! Label.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::align::Alignment;
use crate::ui::canvas::Compositor;
use crate::ui::theme::Theme;
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::Widgetable;

use compact_str::CompactString;
use crossterm::style::Color;

#[derive(Debug, Clone)]
/// Single-line text, aligned inside its shape.
pub struct Label {
  base: InodeBase,
  text: CompactString,
  alignment: Alignment,
  foreground: Color,
}

inode_impl!(Label);

impl Label {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    Label {
      base: InodeBase::new(shape),
      text: CompactString::from(text),
      alignment: Alignment::default(),
      foreground: theme.label.foreground,
    }
  }

  pub fn text(&self) -> &CompactString {
    &self.text
  }

  pub fn set_text(&mut self, text: &str) {
    self.text = CompactString::from(text);
  }

  pub fn alignment(&self) -> Alignment {
    self.alignment
  }

  pub fn set_alignment(&mut self, alignment: Alignment) {
    self.alignment = alignment;
  }

  pub fn set_foreground(&mut self, color: Color) {
    self.foreground = color;
  }
}

impl Widgetable for Label {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let text = strings::truncate(&self.text, actual.width().max(0) as usize);
    let size = ISize::new(strings::char_count(&text) as isize, 1);
    let (x, y) = self.alignment.align(size, &actual);
    canvas.draw_text(x, y, self.foreground, &text);
  }
}
