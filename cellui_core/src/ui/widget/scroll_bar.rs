//! Scroll bar.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{ScrollBarPalette, Theme};
use crate::ui::tree::*;
use crate::ui::widget::{EventContext, Notice, Widgetable};

/// Symbol of the vertical thumb.
pub const VERTICAL_THUMB_SYMBOL: char = '┃';

/// Symbol of the horizontal thumb.
pub const HORIZONTAL_THUMB_SYMBOL: char = '━';

#[derive(Debug, Copy, Clone, PartialEq, derive_builder::Builder)]
/// Scroll bar options.
pub struct ScrollBarOptions {
  #[builder(default = 0.0)]
  minimum_value: f64,

  #[builder(default = 100.0)]
  maximum_value: f64,

  #[builder(default = 0.0)]
  value: f64,

  /// How much a wheel step changes the value.
  #[builder(default = 1.0)]
  on_scroll_value_increment: f64,

  /// How many values are visible at once, it decides the thumb size.
  #[builder(default = 1.0)]
  shown_value_count: f64,
}

impl Default for ScrollBarOptions {
  fn default() -> Self {
    ScrollBarOptions {
      minimum_value: 0.0,
      maximum_value: 100.0,
      value: 0.0,
      on_scroll_value_increment: 1.0,
      shown_value_count: 1.0,
    }
  }
}

impl ScrollBarOptions {
  pub fn builder() -> ScrollBarOptionsBuilder {
    ScrollBarOptionsBuilder::default()
  }

  pub fn minimum_value(&self) -> f64 {
    self.minimum_value
  }

  pub fn maximum_value(&self) -> f64 {
    self.maximum_value
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn on_scroll_value_increment(&self) -> f64 {
    self.on_scroll_value_increment
  }

  pub fn shown_value_count(&self) -> f64 {
    self.shown_value_count
  }
}

#[derive(Debug, Clone)]
/// Scroll bar, it's vertical if its height is greater than its width.
///
/// The value maps linearly to the track, both endpoints inclusive: the first cell is
/// `minimum_value`, the last cell is `maximum_value`.
pub struct ScrollBar {
  base: InodeBase,
  options: ScrollBarOptions,
  palette: ScrollBarPalette,
}

inode_impl!(ScrollBar);

impl ScrollBar {
  pub fn new(shape: IRect, options: &ScrollBarOptions, theme: &Theme) -> Self {
    let mut scroll_bar = ScrollBar {
      base: InodeBase::new(shape),
      options: *options,
      palette: theme.scroll_bar,
    };
    scroll_bar.options.value = scroll_bar.clamp(options.value);
    scroll_bar
  }

  pub fn options(&self) -> &ScrollBarOptions {
    &self.options
  }

  pub fn value(&self) -> f64 {
    self.options.value
  }

  pub fn set_value(&mut self, value: f64) {
    self.options.value = self.clamp(value);
  }

  pub fn set_range(&mut self, minimum_value: f64, maximum_value: f64) {
    self.options.minimum_value = minimum_value;
    self.options.maximum_value = maximum_value;
    self.options.value = self.clamp(self.options.value);
  }

  pub fn set_shown_value_count(&mut self, count: f64) {
    self.options.shown_value_count = count;
  }

  pub fn vertical(&self) -> bool {
    let shape = self.shape();
    shape.height() > shape.width()
  }

  fn track_len(&self) -> isize {
    let shape = self.shape();
    if self.vertical() {
      shape.height()
    } else {
      shape.width()
    }
  }

  fn range(&self) -> f64 {
    self.options.maximum_value - self.options.minimum_value
  }

  fn clamp(&self, value: f64) -> f64 {
    let (min, max) = (self.options.minimum_value, self.options.maximum_value);
    if min <= max {
      value.clamp(min, max)
    } else {
      min
    }
  }

  /// The value at track cell `position` (0-based).
  pub fn value_at(&self, position: isize) -> f64 {
    let len = self.track_len();
    if len <= 1 || self.range() <= 0.0 {
      return self.options.minimum_value;
    }
    let ratio = position as f64 / (len - 1) as f64;
    self.clamp(self.options.minimum_value + ratio * self.range())
  }

  /// The thumb size in cells.
  pub fn thumb_len(&self) -> isize {
    let len = self.track_len();
    if len <= 0 {
      return 0;
    }
    if self.range() <= 0.0 {
      return len;
    }
    let thumb = (len as f64 * self.options.shown_value_count / self.range()).round() as isize;
    num_traits::clamp(thumb, 1, len)
  }

  /// The thumb start cell (0-based) on the track.
  pub fn thumb_position(&self) -> isize {
    let len = self.track_len();
    if len <= 1 || self.range() <= 0.0 {
      return 0;
    }
    let ratio = (self.options.value - self.options.minimum_value) / self.range();
    let position = (ratio * (len - 1) as f64).round() as isize;
    num_traits::clamp(position, 0, len - self.thumb_len())
  }

  fn update(&mut self, ctx: &mut EventContext, value: f64) {
    let value = self.clamp(value);
    if value != self.options.value {
      self.options.value = value;
      ctx.notify(Notice::ValueChanged(self.id(), value));
      ctx.redraw();
    }
  }
}

impl Widgetable for ScrollBar {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let (bg, fg) = (self.palette.background, self.palette.foreground);
    canvas.draw_rectangle(actual, bg, fg, ' ', None);
    let (position, len) = (self.thumb_position(), self.thumb_len());
    if self.vertical() {
      canvas.draw_rectangle(
        xywh(actual.x(), actual.y() + position, actual.width(), len),
        bg,
        fg,
        VERTICAL_THUMB_SYMBOL,
        None,
      );
    } else {
      canvas.draw_rectangle(
        xywh(actual.x() + position, actual.y(), len, actual.height()),
        bg,
        fg,
        HORIZONTAL_THUMB_SYMBOL,
        None,
      );
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    let actual = *self.actual_shape();
    match event {
      Event::Touch { x, y, .. } | Event::Drag { x, y, .. } => {
        let position = if self.vertical() {
          y - actual.y()
        } else {
          x - actual.x()
        };
        let value = self.value_at(position);
        self.update(ctx, value);
      }
      Event::Scroll { delta, .. } => {
        let step = self.options.on_scroll_value_increment;
        let value = if *delta > 0 {
          self.options.value - step
        } else {
          self.options.value + step
        };
        self.update(ctx, value);
      }
      _ => { /* Skip */ }
    }
    Ok(())
  }
}
