//! Alignment and margin resolution.
//!
//! An object is aligned inside a container rectangle, then the margin pushes it away from
//! the aligned edge: a left/top margin moves it right/down, a right/bottom margin moves it
//! left/up, a centered axis ignores the margin.

use crate::prelude::*;

use std::str::FromStr;

#[derive(
  Debug,
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
  strum_macros::Display,
  strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HorizontalAlignment {
  #[default]
  Left,
  Center,
  Right,
}

#[derive(
  Debug,
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
  strum_macros::Display,
  strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VerticalAlignment {
  #[default]
  Top,
  Center,
  Bottom,
}

impl HorizontalAlignment {
  /// Parse from text, e.g. `"left"`, `"center"`, `"right"`.
  pub fn parse(value: &str) -> UiResult<Self> {
    Self::from_str(value.trim())
      .map_err(|_| UiErr::UnknownAlignment(value.to_string()))
  }

  /// Offset of an object with `width` inside a container with `container_width`.
  pub fn offset(&self, width: isize, container_width: isize) -> isize {
    match self {
      HorizontalAlignment::Left => 0,
      HorizontalAlignment::Center => (container_width - width).div_euclid(2),
      HorizontalAlignment::Right => container_width - width,
    }
  }

  /// Resolve horizontal margin to an offset.
  pub fn margin(&self, margin: isize) -> isize {
    match self {
      HorizontalAlignment::Left => margin,
      HorizontalAlignment::Center => 0,
      HorizontalAlignment::Right => -margin,
    }
  }
}

impl VerticalAlignment {
  /// Parse from text, e.g. `"top"`, `"center"`, `"bottom"`.
  pub fn parse(value: &str) -> UiResult<Self> {
    Self::from_str(value.trim())
      .map_err(|_| UiErr::UnknownAlignment(value.to_string()))
  }

  /// Offset of an object with `height` inside a container with `container_height`.
  pub fn offset(&self, height: isize, container_height: isize) -> isize {
    match self {
      VerticalAlignment::Top => 0,
      VerticalAlignment::Center => (container_height - height).div_euclid(2),
      VerticalAlignment::Bottom => container_height - height,
    }
  }

  /// Resolve vertical margin to an offset.
  pub fn margin(&self, margin: isize) -> isize {
    match self {
      VerticalAlignment::Top => margin,
      VerticalAlignment::Center => 0,
      VerticalAlignment::Bottom => -margin,
    }
  }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
/// Alignment on both axes.
pub struct Alignment {
  pub horizontal: HorizontalAlignment,
  pub vertical: VerticalAlignment,
}

impl Alignment {
  pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
    Alignment {
      horizontal,
      vertical,
    }
  }

  /// Both axes centered.
  pub fn center() -> Self {
    Alignment::new(HorizontalAlignment::Center, VerticalAlignment::Center)
  }

  /// Parse from text with horizontal and vertical parts, e.g. `"center top"`.
  pub fn parse(value: &str) -> UiResult<Self> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
      (Some(h), Some(v), None) => Ok(Alignment::new(
        HorizontalAlignment::parse(h)?,
        VerticalAlignment::parse(v)?,
      )),
      _ => Err(UiErr::UnknownAlignment(value.to_string())),
    }
  }

  /// Top-left position of an object with `size`, aligned inside `container`.
  pub fn align(&self, size: ISize, container: &IRect) -> (isize, isize) {
    (
      container.x() + self.horizontal.offset(size.width(), container.width()),
      container.y() + self.vertical.offset(size.height(), container.height()),
    )
  }

  /// Resolve margin to an offset `(dx, dy)`.
  pub fn margin(&self, margin_x: isize, margin_y: isize) -> (isize, isize) {
    (
      self.horizontal.margin(margin_x),
      self.vertical.margin(margin_y),
    )
  }
}
