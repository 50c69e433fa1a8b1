//! Color selector.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::modal::Palette;
use crate::ui::theme::{ColorSelectorPalette, Theme};
use crate::ui::tree::*;
use crate::ui::widget::{EventContext, Notice, Widgetable};

use crossterm::style::Color;

#[derive(Debug, Clone)]
/// A color swatch, it opens the palette picker when touched and stores the chosen color.
pub struct ColorSelector {
  base: InodeBase,
  color: Color,
  picker: Palette,
  palette: ColorSelectorPalette,
}

inode_impl!(ColorSelector);

impl ColorSelector {
  pub fn new(shape: IRect, color: Color, theme: &Theme) -> Self {
    ColorSelector {
      base: InodeBase::new(shape),
      color,
      picker: Palette::new(theme),
      palette: theme.color_selector,
    }
  }

  pub fn color(&self) -> Color {
    self.color
  }

  pub fn set_color(&mut self, color: Color) {
    self.color = color;
  }

  /// Replace the palette picker, e.g. with custom swatches.
  pub fn set_picker(&mut self, picker: Palette) {
    self.picker = picker;
  }
}

impl Widgetable for ColorSelector {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    canvas.draw_rectangle(actual, self.color, self.palette.foreground, ' ', None);
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      let actual = *self.actual_shape();
      let (canvas, events) = ctx.io();
      if let Some(color) = self.picker.show(canvas, events, actual.x(), actual.bottom()) {
        self.color = color;
        ctx.notify(Notice::ColorSelected(self.id(), color));
      }
      ctx.redraw();
    }
    Ok(())
  }
}
