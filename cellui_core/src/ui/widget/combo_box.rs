//! Combo box.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::modal::{DropDownMenu, MenuItem};
use crate::ui::theme::{ComboBoxPalette, Theme};
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, Notice, Widgetable};

use compact_str::CompactString;
use std::time::Duration;

/// Symbol of the arrow on the right side.
pub const ARROW_SYMBOL: char = '▼';

#[derive(Debug, Clone)]
/// Shows the selected item, and a dropdown menu with all items below itself when touched.
pub struct ComboBox {
  base: InodeBase,
  menu: DropDownMenu,
  // 0-based index of the selected item.
  selected_item: Option<usize>,
  palette: ComboBoxPalette,
}

inode_impl!(ComboBox);

impl ComboBox {
  pub fn new(shape: IRect, theme: &Theme) -> Self {
    ComboBox {
      base: InodeBase::new(shape),
      menu: DropDownMenu::new(shape.width(), theme),
      selected_item: None,
      palette: theme.combo_box,
    }
  }

  pub fn add_item(&mut self, text: &str) {
    self.menu.add_item(MenuItem::new(text));
  }

  pub fn items(&self) -> Vec<CompactString> {
    self.menu.items().iter().map(|i| i.text().clone()).collect()
  }

  pub fn clear(&mut self) {
    self.menu.clear();
    self.selected_item = None;
  }

  pub fn selected_item(&self) -> Option<usize> {
    self.selected_item
  }

  /// Select an item by its 0-based index, out of range index clears the selection.
  pub fn set_selected_item(&mut self, index: Option<usize>) {
    self.selected_item = index.filter(|i| *i < self.menu.items().len());
  }

  pub fn selected_text(&self) -> Option<&CompactString> {
    self
      .selected_item
      .and_then(|i| self.menu.item(i))
      .map(|item| item.text())
  }

  pub fn set_press_duration(&mut self, duration: Duration) {
    self.menu.set_press_duration(duration);
  }
}

impl Widgetable for ComboBox {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let palette = &self.palette;
    canvas.draw_rectangle(actual, palette.background, palette.foreground, ' ', None);
    if let Some(text) = self.selected_text() {
      let width = (actual.width() - 3).max(0) as usize;
      canvas.draw_text(
        actual.x() + 1,
        actual.y(),
        palette.foreground,
        &strings::truncate(text, width),
      );
    }
    let arrow = xywh(actual.right() - 1, actual.y(), 1, actual.height());
    canvas.draw_rectangle(
      arrow,
      palette.arrow_background,
      palette.arrow_foreground,
      ' ',
      None,
    );
    canvas.draw_text(
      arrow.x(),
      arrow.y(),
      palette.arrow_foreground,
      &ARROW_SYMBOL.to_string(),
    );
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      let actual = *self.actual_shape();
      self.menu.set_width(actual.width());
      let (canvas, events) = ctx.io();
      let selected = self.menu.show(canvas, events, actual.x(), actual.bottom());
      if let Some((text, position)) = selected {
        let index = position - 1;
        self.selected_item = Some(index);
        debug!("combo box {:?} selected {:?}:{:?}", self.id(), index, text);
        ctx.notify(Notice::Selected(self.id(), index, text));
      }
      ctx.redraw();
    }
    Ok(())
  }
}
