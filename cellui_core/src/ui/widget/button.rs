//! Button.

use crate::constant::PRESS_DURATION;
use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::align::Alignment;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{ButtonPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Notice, TreeCommand, Widgetable};

use compact_str::CompactString;
use crossterm::style::Color;
use std::time::Duration;

#[derive(
  Debug,
  Copy,
  Clone,
  PartialEq,
  Eq,
  strum_macros::Display,
  strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
/// What a button does to the window it belongs to.
pub enum WindowAction {
  Close,
  Minimize,
  Maximize,
}

#[derive(Debug, Clone)]
/// Pressable button.
///
/// A touch latches the pressed colors for [`press_duration`](Button::press_duration), then
/// releases and emits [`Notice::Pressed`]. In switch mode, a touch toggles the pressed state
/// immediately and emits [`Notice::Toggled`].
pub struct Button {
  base: InodeBase,
  text: CompactString,
  alignment: Alignment,
  palette: ButtonPalette,
  pressed: bool,
  switch_mode: bool,
  press_duration: Duration,
  window_action: Option<WindowAction>,
}

inode_impl!(Button);

impl Button {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    Button {
      base: InodeBase::new(shape),
      text: CompactString::from(text),
      alignment: Alignment::center(),
      palette: theme.button,
      pressed: false,
      switch_mode: false,
      press_duration: *PRESS_DURATION,
      window_action: None,
    }
  }

  pub fn text(&self) -> &CompactString {
    &self.text
  }

  pub fn set_text(&mut self, text: &str) {
    self.text = CompactString::from(text);
  }

  pub fn set_alignment(&mut self, alignment: Alignment) {
    self.alignment = alignment;
  }

  /// Override the normal background and foreground colors.
  pub fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) {
    if let Some(bg) = background {
      self.palette.background = bg;
    }
    if let Some(fg) = foreground {
      self.palette.foreground = fg;
    }
  }

  pub fn pressed(&self) -> bool {
    self.pressed
  }

  pub fn set_pressed(&mut self, value: bool) {
    self.pressed = value;
  }

  pub fn switch_mode(&self) -> bool {
    self.switch_mode
  }

  pub fn set_switch_mode(&mut self, value: bool) {
    self.switch_mode = value;
  }

  pub fn press_duration(&self) -> Duration {
    self.press_duration
  }

  pub fn set_press_duration(&mut self, duration: Duration) {
    self.press_duration = duration;
  }

  pub fn window_action(&self) -> Option<WindowAction> {
    self.window_action
  }

  pub fn set_window_action(&mut self, action: Option<WindowAction>) {
    self.window_action = action;
  }

  fn colors(&self) -> (Color, Color) {
    if self.disabled() {
      (
        self.palette.disabled_background,
        self.palette.disabled_foreground,
      )
    } else if self.pressed {
      (
        self.palette.pressed_background,
        self.palette.pressed_foreground,
      )
    } else {
      (self.palette.background, self.palette.foreground)
    }
  }
}

impl Widgetable for Button {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let (bg, fg) = self.colors();
    canvas.draw_rectangle(actual, bg, fg, ' ', None);
    let text = strings::truncate(&self.text, actual.width().max(0) as usize);
    let size = ISize::new(strings::char_count(&text) as isize, 1);
    let (x, y) = self.alignment.align(size, &actual);
    canvas.draw_text(x, y, fg, &text);
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      let id = self.id();
      if self.switch_mode {
        self.pressed = !self.pressed;
        ctx.notify(Notice::Toggled(id, self.pressed));
        ctx.redraw();
        return Ok(());
      }

      self.pressed = true;
      ctx.latch(self.press_duration);
      if let (Some(action), Some(window_id)) = (self.window_action, ctx.window_id()) {
        let command = match action {
          WindowAction::Close => TreeCommand::Close(window_id),
          WindowAction::Minimize => TreeCommand::Minimize(window_id),
          WindowAction::Maximize => TreeCommand::Maximize(window_id),
        };
        ctx.command(command);
      }
    }
    Ok(())
  }

  fn release(&mut self) -> Option<Notice> {
    if self.pressed && !self.switch_mode {
      self.pressed = false;
      Some(Notice::Pressed(self.id()))
    } else {
      None
    }
  }
}
