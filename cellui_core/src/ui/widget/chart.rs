//! Chart.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{ChartPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::Widgetable;

use compact_str::{CompactString, format_compact};

/// Symbol of a plotted point.
pub const POINT_SYMBOL: char = '•';

#[derive(Debug, Clone)]
/// Plots `(x, y)` values, with axes on the left and bottom, and min/max labels.
///
/// The layout inside the widget is:
///
/// ```text
/// max_y │    •
///       │ •     •
/// min_y │•
///       └────────
///        min_x max_x
/// ```
pub struct Chart {
  base: InodeBase,
  values: Vec<(f64, f64)>,
  palette: ChartPalette,
}

inode_impl!(Chart);

fn label(value: f64) -> CompactString {
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format_compact!("{}", value as i64)
  } else {
    format_compact!("{:.2}", value)
  }
}

impl Chart {
  pub fn new(shape: IRect, theme: &Theme) -> Self {
    Chart {
      base: InodeBase::new(shape),
      values: vec![],
      palette: theme.chart,
    }
  }

  pub fn values(&self) -> &[(f64, f64)] {
    &self.values
  }

  pub fn set_values(&mut self, values: Vec<(f64, f64)>) {
    self.values = values;
  }

  pub fn add_value(&mut self, x: f64, y: f64) {
    self.values.push((x, y));
  }

  /// The `(min_x, max_x, min_y, max_y)` bounds, `None` if there's no value.
  pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
    let first = self.values.first()?;
    Some(self.values.iter().fold(
      (first.0, first.0, first.1, first.1),
      |(min_x, max_x, min_y, max_y), (x, y)| {
        (min_x.min(*x), max_x.max(*x), min_y.min(*y), max_y.max(*y))
      },
    ))
  }

  /// The plot area inside the axes, relative to the widget.
  ///
  /// Returns `(x, y, width, height)` in cells, the width of the y-axis labels is decided by
  /// the longer one of the min/max labels.
  fn plot_area(&self) -> (isize, isize, isize, isize) {
    let shape = self.shape();
    let label_width = match self.bounds() {
      Some((_, _, min_y, max_y)) => {
        strings::char_count(&label(min_y)).max(strings::char_count(&label(max_y)))
          as isize
      }
      None => 0,
    };
    let x = label_width + 2;
    (x, 0, (shape.width() - x).max(0), (shape.height() - 2).max(0))
  }

  /// The screen cell of a value.
  pub fn value_position(&self, x: f64, y: f64) -> Option<(isize, isize)> {
    let (min_x, max_x, min_y, max_y) = self.bounds()?;
    let (px, py, width, height) = self.plot_area();
    if width <= 0 || height <= 0 {
      return None;
    }
    let scale = |value: f64, min: f64, max: f64, len: isize| -> isize {
      if max > min {
        ((value - min) / (max - min) * (len - 1) as f64).round() as isize
      } else {
        0
      }
    };
    let actual = self.actual_shape();
    let column = actual.x() + px + scale(x, min_x, max_x, width);
    let row = actual.y() + py + height - 1 - scale(y, min_y, max_y, height);
    Some((column, row))
  }
}

impl Widgetable for Chart {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let (px, py, width, height) = self.plot_area();
    let palette = &self.palette;

    // Axes
    let axis_x = actual.x() + px - 1;
    for row in 0..height {
      canvas.draw_text(axis_x, actual.y() + py + row, palette.axis, "│");
    }
    let bottom: String = std::iter::once('└')
      .chain(std::iter::repeat_n('─', width.max(0) as usize))
      .collect();
    canvas.draw_text(axis_x, actual.y() + py + height, palette.axis, &bottom);

    let (min_x, max_x, min_y, max_y) = match self.bounds() {
      Some(bounds) => bounds,
      None => return,
    };

    // Labels
    let label_width = px - 2;
    let max_label = label(max_y);
    let min_label = label(min_y);
    let right_aligned = |text: &CompactString| -> isize {
      actual.x() + label_width - strings::char_count(text) as isize
    };
    canvas.draw_text(right_aligned(&max_label), actual.y() + py, palette.value, &max_label);
    if height > 1 {
      canvas.draw_text(
        right_aligned(&min_label),
        actual.y() + py + height - 1,
        palette.value,
        &min_label,
      );
    }
    let labels_y = actual.y() + py + height + 1;
    canvas.draw_text(actual.x() + px, labels_y, palette.value, &label(min_x));
    let max_x_label = label(max_x);
    canvas.draw_text(
      actual.x() + px + width - strings::char_count(&max_x_label) as isize,
      labels_y,
      palette.value,
      &max_x_label,
    );

    // Values
    let point = POINT_SYMBOL.to_string();
    for (x, y) in self.values.iter() {
      if let Some((column, row)) = self.value_position(*x, *y) {
        canvas.draw_text(column, row, palette.line, &point);
      }
    }
  }
}
