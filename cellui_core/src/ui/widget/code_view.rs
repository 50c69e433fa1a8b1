//! Code view.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{CodeViewPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Widgetable};

use compact_str::{CompactString, format_compact};

#[derive(Debug, Clone)]
/// Lines of code with a line-number gutter on the left.
///
/// The view starts from line [`from_line`](CodeView::from_line) and symbol
/// [`from_symbol`](CodeView::from_symbol), both 0-based. Scroll events move it vertically.
pub struct CodeView {
  base: InodeBase,
  lines: Vec<CompactString>,
  from_line: usize,
  from_symbol: usize,
  // 0-based indexes of highlighted lines.
  highlights: HashSet<usize>,
  palette: CodeViewPalette,
}

inode_impl!(CodeView);

impl CodeView {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    CodeView {
      base: InodeBase::new(shape),
      lines: text.lines().map(CompactString::from).collect(),
      from_line: 0,
      from_symbol: 0,
      highlights: HashSet::new(),
      palette: theme.code_view,
    }
  }

  pub fn lines(&self) -> &[CompactString] {
    &self.lines
  }

  pub fn set_text(&mut self, text: &str) {
    self.lines = text.lines().map(CompactString::from).collect();
    self.from_line = self.from_line.min(self.max_from_line());
  }

  pub fn from_line(&self) -> usize {
    self.from_line
  }

  pub fn set_from_line(&mut self, line: usize) {
    self.from_line = line.min(self.max_from_line());
  }

  pub fn from_symbol(&self) -> usize {
    self.from_symbol
  }

  pub fn set_from_symbol(&mut self, symbol: usize) {
    self.from_symbol = symbol;
  }

  pub fn highlight(&mut self, line: usize, value: bool) {
    if value {
      self.highlights.insert(line);
    } else {
      self.highlights.remove(&line);
    }
  }

  pub fn is_highlighted(&self, line: usize) -> bool {
    self.highlights.contains(&line)
  }

  pub fn clear_highlights(&mut self) {
    self.highlights.clear();
  }

  /// Gutter width: digits of the last line number plus one padding cell on each side.
  pub fn gutter_width(&self) -> isize {
    self.lines.len().max(1).to_string().len() as isize + 2
  }

  fn max_from_line(&self) -> usize {
    self
      .lines
      .len()
      .saturating_sub(self.shape().height().max(0) as usize)
  }
}

impl Widgetable for CodeView {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let palette = &self.palette;
    let gutter_width = self.gutter_width();
    canvas.draw_rectangle(actual, palette.background, palette.foreground, ' ', None);
    let gutter = actual.with_size(gutter_width.min(actual.width()), actual.height());
    canvas.draw_rectangle(
      gutter,
      palette.gutter_background,
      palette.gutter_foreground,
      ' ',
      None,
    );

    let code_width = (actual.width() - gutter_width).max(0) as usize;
    for row in 0..actual.height() {
      let index = self.from_line + row as usize;
      let line = match self.lines.get(index) {
        Some(line) => line,
        None => break,
      };
      let y = actual.y() + row;
      if self.highlights.contains(&index) {
        canvas.draw_rectangle(
          xywh(gutter.right(), y, code_width as isize, 1),
          palette.highlight,
          palette.foreground,
          ' ',
          None,
        );
      }
      let number = format_compact!("{:>1$}", index + 1, (gutter_width - 2) as usize);
      canvas.draw_text(actual.x() + 1, y, palette.gutter_foreground, &number);
      let code = strings::char_slice(line, self.from_symbol, code_width);
      canvas.draw_text(gutter.right(), y, palette.foreground, &code);
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Scroll { delta, .. } = event {
      let line = if *delta > 0 {
        self.from_line.saturating_sub(1)
      } else {
        (self.from_line + 1).min(self.max_from_line())
      };
      if line != self.from_line {
        self.from_line = line;
        ctx.redraw();
      }
    }
    Ok(())
  }
}
