//! Blocking single-line text editor.

use crate::constant::{CURSOR_BLINK_INTERVAL, CURSOR_SYMBOL};
use crate::evloop::{Event, EventSource, ModalPull, pull_modal};
use crate::prelude::*;
use crate::ui::canvas::{Compositor, RegionGuard};
use crate::ui::theme::InputPalette;

use compact_str::CompactString;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Editing state of a single line: chars, cursor, and the horizontal window.
///
/// The window starts from char [`text_cut_from`](LineEditor::text_cut_from) and is `width`
/// cells wide, it's always moved so the cursor is visible. The cursor can stay after the
/// last char, thus it takes one more cell than the text.
pub struct LineEditor {
  chars: Vec<char>,
  cursor: usize,
  text_cut_from: usize,
  width: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// What the editing loop does after a key.
pub enum EditFlow {
  Continue,
  Finish,
}

impl LineEditor {
  /// Make an editor with the cursor at the end of text.
  pub fn new(text: &str, width: usize) -> Self {
    let chars: Vec<char> = text.chars().collect();
    let mut editor = LineEditor {
      cursor: chars.len(),
      chars,
      text_cut_from: 0,
      width: width.max(1),
    };
    editor.scroll_to_cursor();
    editor
  }

  pub fn text(&self) -> CompactString {
    self.chars.iter().collect()
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn text_cut_from(&self) -> usize {
    self.text_cut_from
  }

  pub fn width(&self) -> usize {
    self.width
  }

  /// The cursor column inside the window.
  pub fn cursor_column(&self) -> usize {
    self.cursor - self.text_cut_from
  }

  /// The chars inside the window.
  pub fn visible(&self) -> CompactString {
    self
      .chars
      .iter()
      .skip(self.text_cut_from)
      .take(self.width)
      .collect()
  }

  fn scroll_to_cursor(&mut self) {
    if self.cursor < self.text_cut_from {
      self.text_cut_from = self.cursor;
    } else if self.cursor >= self.text_cut_from + self.width {
      self.text_cut_from = self.cursor + 1 - self.width;
    }
  }

  pub fn move_left(&mut self) {
    self.cursor = self.cursor.saturating_sub(1);
    self.scroll_to_cursor();
  }

  pub fn move_right(&mut self) {
    self.cursor = (self.cursor + 1).min(self.chars.len());
    self.scroll_to_cursor();
  }

  pub fn move_home(&mut self) {
    self.cursor = 0;
    self.scroll_to_cursor();
  }

  pub fn move_end(&mut self) {
    self.cursor = self.chars.len();
    self.scroll_to_cursor();
  }

  /// Move the cursor to a window column, e.g. where the pointer touches.
  pub fn move_to_column(&mut self, column: usize) {
    self.cursor = (self.text_cut_from + column).min(self.chars.len());
    self.scroll_to_cursor();
  }

  /// Delete the char before cursor.
  pub fn backspace(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
      self.chars.remove(self.cursor);
      self.scroll_to_cursor();
    }
  }

  /// Delete the char at cursor.
  pub fn delete(&mut self) {
    if self.cursor < self.chars.len() {
      self.chars.remove(self.cursor);
    }
  }

  pub fn insert(&mut self, c: char) {
    if c.is_control() {
      return;
    }
    self.chars.insert(self.cursor, c);
    self.cursor += 1;
    self.scroll_to_cursor();
  }

  /// Insert text at cursor, line breaks and other control chars are dropped.
  pub fn paste(&mut self, text: &str) {
    for c in text.chars() {
      self.insert(c);
    }
  }

  /// Apply a key.
  pub fn handle_key(&mut self, code: KeyCode) -> EditFlow {
    match code {
      KeyCode::Enter => return EditFlow::Finish,
      KeyCode::Left => self.move_left(),
      KeyCode::Right => self.move_right(),
      KeyCode::Home => self.move_home(),
      KeyCode::End => self.move_end(),
      KeyCode::Backspace => self.backspace(),
      KeyCode::Delete => self.delete(),
      KeyCode::Char(c) => self.insert(c),
      _ => { /* Skip */ }
    }
    EditFlow::Continue
  }
}

#[derive(Debug, Clone)]
/// Style of the editing loop.
pub struct EditStyle {
  pub palette: InputPalette,
  /// Every char is shown as this symbol, e.g. passwords.
  pub text_mask: Option<char>,
}

fn draw_editor(
  canvas: &mut dyn Compositor,
  area: &IRect,
  editor: &LineEditor,
  style: &EditStyle,
  blink: bool,
) {
  let palette = &style.palette;
  canvas.draw_rectangle(
    *area,
    palette.focused_background,
    palette.focused_foreground,
    ' ',
    None,
  );
  let visible = editor.visible();
  let text: CompactString = match style.text_mask {
    Some(mask) => visible.chars().map(|_| mask).collect(),
    None => visible,
  };
  canvas.draw_text(area.x(), area.y(), palette.focused_foreground, &text);
  if blink {
    canvas.draw_text(
      area.x() + editor.cursor_column() as isize,
      area.y(),
      palette.cursor,
      &CURSOR_SYMBOL.to_string(),
    );
  }
}

/// Run the blocking editing loop on a one-row `area`.
///
/// The wait times out every [`CURSOR_BLINK_INTERVAL`] to toggle the cursor. Enter, or a
/// touch outside of `area`, finishes editing. A touch inside moves the cursor. Returns the
/// edited text, the covered region is restored before it returns.
pub fn edit_line(
  canvas: &mut dyn Compositor,
  events: &mut dyn EventSource,
  area: IRect,
  text: &str,
  style: &EditStyle,
) -> CompactString {
  let area = area.with_size(area.width(), 1);
  let mut editor = LineEditor::new(text, area.width().max(1) as usize);
  let mut guard = RegionGuard::new(canvas, area);
  let mut blink = true;

  loop {
    draw_editor(&mut *guard, &area, &editor, style, blink);
    guard.flip(false);

    match pull_modal(events, Some(*CURSOR_BLINK_INTERVAL)) {
      ModalPull::Unwind => break,
      ModalPull::Timeout => blink = !blink,
      ModalPull::Event(event) => {
        blink = true;
        match event {
          Event::KeyDown { code } => {
            if editor.handle_key(code) == EditFlow::Finish {
              break;
            }
          }
          Event::Clipboard { text } => editor.paste(&text),
          Event::Touch { x, y, .. } => {
            if !area.contains_xy(x, y) {
              break;
            }
            editor.move_to_column((x - area.x()) as usize);
          }
          _ => { /* Skip */ }
        }
      }
    }
  }

  trace!("edit line finished:{:?}", editor.text());
  editor.text()
}
