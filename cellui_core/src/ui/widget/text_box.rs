//! Text box.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{TextBoxPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Widgetable};

use compact_str::CompactString;
use crossterm::style::Color;

#[derive(Debug, Clone)]
/// Multi-line word-wrapped text, scrolled by scroll events.
pub struct TextBox {
  base: InodeBase,
  text: CompactString,
  // Index of the first visible wrapped line.
  offset: usize,
  palette: TextBoxPalette,
}

inode_impl!(TextBox);

impl TextBox {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    TextBox {
      base: InodeBase::new(shape),
      text: CompactString::from(text),
      offset: 0,
      palette: theme.text_box,
    }
  }

  pub fn text(&self) -> &CompactString {
    &self.text
  }

  /// Replace the text, and scroll back to the top.
  pub fn set_text(&mut self, text: &str) {
    self.text = CompactString::from(text);
    self.offset = 0;
  }

  pub fn set_foreground(&mut self, color: Color) {
    self.palette.foreground = color;
  }

  pub fn offset(&self) -> usize {
    self.offset
  }

  pub fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.max_offset());
  }

  /// Lines after wrapped by the widget width.
  pub fn lines(&self) -> Vec<CompactString> {
    strings::wrap(&self.text, self.shape().width().max(0) as usize)
  }

  fn max_offset(&self) -> usize {
    self
      .lines()
      .len()
      .saturating_sub(self.shape().height().max(0) as usize)
  }
}

impl Widgetable for TextBox {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let (bg, fg) = (self.palette.background, self.palette.foreground);
    canvas.draw_rectangle(actual, bg, fg, ' ', None);
    let lines = self.lines();
    for (row, line) in lines
      .iter()
      .skip(self.offset)
      .take(actual.height().max(0) as usize)
      .enumerate()
    {
      canvas.draw_text(actual.x(), actual.y() + row as isize, fg, line);
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Scroll { delta, .. } = event {
      let offset = if *delta > 0 {
        self.offset.saturating_sub(1)
      } else {
        (self.offset + 1).min(self.max_offset())
      };
      if offset != self.offset {
        self.offset = offset;
        ctx.redraw();
      }
    }
    Ok(())
  }
}
