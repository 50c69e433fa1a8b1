//! Error dialog.

use crate::evloop::{Event, EventSource, ModalPull, pull_modal};
use crate::prelude::*;
use crate::ui::canvas::{Compositor, RegionGuard};
use crate::ui::theme::{ErrorDialogPalette, Theme};
use crate::ui::util::strings;

use compact_str::CompactString;
use crossterm::event::KeyCode;

/// The sign glyph on the left of the message.
pub const SIGN_SYMBOL: char = '⚠';

/// Text of the confirm control.
pub const OK_TEXT: &str = "Ok";

#[derive(Debug, Clone)]
/// A band across the whole screen width, showing a sign, a word-wrapped message and an "Ok"
/// control.
pub struct ErrorDialog {
  message: CompactString,
  palette: ErrorDialogPalette,
}

impl ErrorDialog {
  pub fn new(message: &str, theme: &Theme) -> Self {
    ErrorDialog {
      message: CompactString::from(message),
      palette: theme.error_dialog,
    }
  }

  pub fn message(&self) -> &CompactString {
    &self.message
  }

  fn message_width(screen: USize) -> usize {
    // Sign on the left, and 4 cells padding on each side.
    screen.width().saturating_sub(12).max(1)
  }

  /// The band shape, and the "Ok" control shape.
  pub fn layout(&self, screen: USize) -> (IRect, IRect) {
    let lines = strings::wrap(&self.message, Self::message_width(screen));
    let height = lines.len() as isize + 4;
    let y = (screen.height() as isize - height).div_euclid(2).max(0);
    let band = xywh(0, y, screen.width() as isize, height);
    let ok_width = OK_TEXT.len() as isize + 2;
    let ok = xywh(
      band.right() - 4 - ok_width,
      band.bottom() - 2,
      ok_width,
      1,
    );
    (band, ok)
  }

  fn draw(&self, canvas: &mut dyn Compositor, band: &IRect, ok: &IRect) {
    let palette = &self.palette;
    canvas.draw_rectangle(*band, palette.background, palette.foreground, ' ', None);
    canvas.draw_text(band.x() + 4, band.y() + 1, palette.sign, &SIGN_SYMBOL.to_string());
    let lines = strings::wrap(&self.message, Self::message_width(canvas.size()));
    for (i, line) in lines.iter().enumerate() {
      canvas.draw_text(band.x() + 8, band.y() + 1 + i as isize, palette.foreground, line);
    }
    canvas.draw_rectangle(
      *ok,
      palette.button_background,
      palette.button_foreground,
      ' ',
      None,
    );
    canvas.draw_text(ok.x() + 1, ok.y(), palette.button_foreground, OK_TEXT);
  }

  /// Show the dialog, and block until "Ok" is touched or Enter is pressed.
  pub fn show(&self, canvas: &mut dyn Compositor, events: &mut dyn EventSource) {
    let (band, ok) = self.layout(canvas.size());
    warn!("error dialog: {}", self.message);
    let mut guard = RegionGuard::new(canvas, band);
    self.draw(&mut *guard, &band, &ok);
    guard.flip(false);

    loop {
      match pull_modal(events, None) {
        ModalPull::Unwind => return,
        ModalPull::Timeout => continue,
        ModalPull::Event(Event::Touch { x, y, .. }) if ok.contains_xy(x, y) => return,
        ModalPull::Event(Event::KeyDown {
          code: KeyCode::Enter,
        }) => return,
        ModalPull::Event(_) => { /* Skip */ }
      }
    }
  }
}
