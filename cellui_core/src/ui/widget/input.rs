//! Single-line text inputs.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{InputPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Notice, Widgetable};

use compact_str::CompactString;
use regex::Regex;

// Re-export
pub use editor::*;

pub mod editor;


#[derive(Debug, Clone)]
/// Validates the edited text, a rejected text is dropped and the previous text is kept.
pub enum InputValidator {
  /// The text must match the regex. Anchor it (`^...$`) to match the whole text.
  Regex(Regex),
  Custom(fn(&str) -> bool),
}

impl InputValidator {
  pub fn accept(&self, text: &str) -> bool {
    match self {
      InputValidator::Regex(re) => re.is_match(text),
      InputValidator::Custom(f) => f(text),
    }
  }
}

#[derive(Debug, Clone)]
/// State shared by [`Input`] and [`InputField`].
pub struct InputState {
  text: CompactString,
  placeholder: Option<CompactString>,
  text_mask: Option<char>,
  validator: Option<InputValidator>,
  palette: InputPalette,
}

impl InputState {
  fn new(text: &str, theme: &Theme) -> Self {
    InputState {
      text: CompactString::from(text),
      placeholder: None,
      text_mask: None,
      validator: None,
      palette: theme.input,
    }
  }

  fn draw_text(&self, canvas: &mut dyn Compositor, area: &IRect) {
    let width = area.width().max(0) as usize;
    if self.text.is_empty() {
      if let Some(placeholder) = &self.placeholder {
        let visible = strings::truncate(placeholder, width);
        canvas.draw_text(area.x(), area.y(), self.palette.placeholder, &visible);
      }
      return;
    }
    let visible: CompactString = match self.text_mask {
      Some(mask) => self.text.chars().take(width).map(|_| mask).collect(),
      None => self.text.chars().take(width).collect(),
    };
    canvas.draw_text(area.x(), area.y(), self.palette.foreground, &visible);
  }

  fn edit(&mut self, id: TreeNodeId, ctx: &mut EventContext, area: IRect) {
    let style = EditStyle {
      palette: self.palette,
      text_mask: self.text_mask,
    };
    let (canvas, events) = ctx.io();
    let edited = edit_line(canvas, events, area, &self.text, &style);
    let accepted = self
      .validator
      .as_ref()
      .is_none_or(|validator| validator.accept(&edited));
    if accepted {
      self.text = edited.clone();
      ctx.notify(Notice::InputFinished(id, edited));
    } else {
      debug!("input {:?} rejected text:{:?}", id, edited);
    }
    ctx.redraw();
  }
}

macro_rules! input_state_accessors {
  ($name:ident) => {
    impl $name {
      pub fn text(&self) -> &CompactString {
        &self.state.text
      }

      /// Set text directly, the validator is not applied.
      pub fn set_text(&mut self, text: &str) {
        self.state.text = CompactString::from(text);
      }

      pub fn placeholder(&self) -> Option<&CompactString> {
        self.state.placeholder.as_ref()
      }

      /// Text shown with the placeholder color when the input is empty.
      pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.state.placeholder = placeholder.map(CompactString::from);
      }

      pub fn text_mask(&self) -> Option<char> {
        self.state.text_mask
      }

      pub fn set_text_mask(&mut self, mask: Option<char>) {
        self.state.text_mask = mask;
      }

      pub fn validator(&self) -> Option<&InputValidator> {
        self.state.validator.as_ref()
      }

      pub fn set_validator(&mut self, validator: Option<InputValidator>) {
        self.state.validator = validator;
      }
    }
  };
}

#[derive(Debug, Clone)]
/// Framed single-line text input.
///
/// The text is drawn on the middle row, with one cell padding on each side. A touch runs
/// the blocking editor on it, see [`edit_line`].
pub struct Input {
  base: InodeBase,
  state: InputState,
}

inode_impl!(Input);
input_state_accessors!(Input);

impl Input {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    Input {
      base: InodeBase::new(shape),
      state: InputState::new(text, theme),
    }
  }

  /// The text row on screen.
  pub fn text_area(&self) -> IRect {
    let actual = self.actual_shape();
    xywh(
      actual.x() + 1,
      actual.y() + (actual.height() - 1).div_euclid(2),
      actual.width() - 2,
      1,
    )
  }
}

impl Widgetable for Input {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let palette = &self.state.palette;
    canvas.draw_rectangle(actual, palette.background, palette.foreground, ' ', None);
    self.state.draw_text(canvas, &self.text_area());
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      let area = self.text_area();
      let id = self.id();
      self.state.edit(id, ctx, area);
    }
    Ok(())
  }
}

#[derive(Debug, Clone)]
/// Unframed single-line text input, the text fills the first row and no background is
/// drawn.
pub struct InputField {
  base: InodeBase,
  state: InputState,
}

inode_impl!(InputField);
input_state_accessors!(InputField);

impl InputField {
  pub fn new(shape: IRect, text: &str, theme: &Theme) -> Self {
    InputField {
      base: InodeBase::new(shape),
      state: InputState::new(text, theme),
    }
  }

  /// The text row on screen.
  pub fn text_area(&self) -> IRect {
    let actual = self.actual_shape();
    xywh(actual.x(), actual.y(), actual.width(), 1)
  }
}

impl Widgetable for InputField {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    self.state.draw_text(canvas, &self.text_area());
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      let area = self.text_area();
      let id = self.id();
      self.state.edit(id, ctx, area);
    }
    Ok(())
  }
}
