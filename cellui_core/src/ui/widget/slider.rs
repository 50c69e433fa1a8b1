//! Slider.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{SliderPalette, Theme};
use crate::ui::tree::*;
use crate::ui::widget::{EventContext, Notice, Widgetable};

use compact_str::format_compact;

/// Symbol of the track.
pub const TRACK_SYMBOL: char = '━';

/// Symbol of the thumb.
pub const THUMB_SYMBOL: char = '●';

#[derive(Debug, Copy, Clone, PartialEq, derive_builder::Builder)]
/// Slider options.
pub struct SliderOptions {
  #[builder(default = 0.0)]
  minimum_value: f64,

  #[builder(default = 100.0)]
  maximum_value: f64,

  #[builder(default = 0.0)]
  value: f64,

  /// Round the value to integer.
  #[builder(default = false)]
  rounding: bool,

  /// Show the value below the track.
  #[builder(default = false)]
  show_value: bool,
}

impl Default for SliderOptions {
  fn default() -> Self {
    SliderOptions {
      minimum_value: 0.0,
      maximum_value: 100.0,
      value: 0.0,
      rounding: false,
      show_value: false,
    }
  }
}

impl SliderOptions {
  pub fn builder() -> SliderOptionsBuilder {
    SliderOptionsBuilder::default()
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

  pub fn rounding(&self) -> bool {
    self.rounding
  }

  pub fn show_value(&self) -> bool {
    self.show_value
  }
}

#[derive(Debug, Clone)]
/// A continuous value bound to the pointer x position within the track.
pub struct Slider {
  base: InodeBase,
  options: SliderOptions,
  palette: SliderPalette,
}

inode_impl!(Slider);

impl Slider {
  pub fn new(shape: IRect, options: &SliderOptions, theme: &Theme) -> Self {
    Slider {
      base: InodeBase::new(shape),
      options: *options,
      palette: theme.slider,
    }
  }

  pub fn options(&self) -> &SliderOptions {
    &self.options
  }

  pub fn minimum_value(&self) -> f64 {
    self.options.minimum_value
  }

  pub fn maximum_value(&self) -> f64 {
    self.options.maximum_value
  }

  pub fn value(&self) -> f64 {
    self.options.value
  }

  /// Set value, it's clamped to `[minimum_value, maximum_value]` on next draw.
  pub fn set_value(&mut self, value: f64) {
    self.options.value = value;
  }

  fn clamp(&self, value: f64) -> f64 {
    let (min, max) = (self.options.minimum_value, self.options.maximum_value);
    let value = if min <= max {
      value.clamp(min, max)
    } else {
      min
    };
    if self.options.rounding {
      value.round()
    } else {
      value
    }
  }

  /// The value at column `x` (on screen).
  pub fn value_at(&self, x: isize) -> f64 {
    let actual = self.actual_shape();
    let (min, max) = (self.options.minimum_value, self.options.maximum_value);
    if actual.width() <= 1 {
      return self.clamp(min);
    }
    let ratio = (x - actual.x()) as f64 / (actual.width() - 1) as f64;
    self.clamp(min + ratio.clamp(0.0, 1.0) * (max - min))
  }

  /// The thumb column (on screen) of current value.
  pub fn thumb_x(&self) -> isize {
    let actual = self.actual_shape();
    let (min, max) = (self.options.minimum_value, self.options.maximum_value);
    if max <= min || actual.width() <= 1 {
      return actual.x();
    }
    let ratio = (self.clamp(self.options.value) - min) / (max - min);
    actual.x() + (ratio * (actual.width() - 1) as f64).round() as isize
  }
}

impl Widgetable for Slider {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    self.options.value = self.clamp(self.options.value);
    let actual = *self.actual_shape();
    let thumb_x = self.thumb_x();

    let track: String = std::iter::repeat_n(TRACK_SYMBOL, actual.width().max(0) as usize).collect();
    canvas.draw_text(actual.x(), actual.y(), self.palette.passive, &track);
    let active: String =
      std::iter::repeat_n(TRACK_SYMBOL, (thumb_x - actual.x()).max(0) as usize).collect();
    canvas.draw_text(actual.x(), actual.y(), self.palette.active, &active);
    canvas.draw_text(thumb_x, actual.y(), self.palette.pipe, &THUMB_SYMBOL.to_string());

    if self.options.show_value && actual.height() > 1 {
      let text = if self.options.rounding {
        format_compact!("{}", self.options.value as i64)
      } else {
        format_compact!("{:.2}", self.options.value)
      };
      let x = actual.x() + (actual.width() - text.len() as isize).div_euclid(2);
      canvas.draw_text(x, actual.y() + 1, self.palette.value, &text);
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    match event {
      Event::Touch { x, .. } | Event::Drag { x, .. } => {
        let value = self.value_at(*x);
        if value != self.options.value {
          self.options.value = value;
          ctx.notify(Notice::ValueChanged(self.id(), value));
          ctx.redraw();
        }
      }
      _ => { /* Skip */ }
    }
    Ok(())
  }
}
