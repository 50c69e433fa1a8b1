//! Dropdown and context menus.

use crate::constant::PRESS_DURATION;
use crate::evloop::{Event, EventSource, ModalPull, pull_modal};
use crate::prelude::*;
use crate::ui::canvas::{Compositor, RegionGuard};
use crate::ui::theme::{MenuPalette, Theme};
use crate::ui::util::strings;

use compact_str::CompactString;
use std::time::Duration;

/// Symbol of the separator line.
pub const SEPARATOR_SYMBOL: char = '─';

#[derive(Debug, Clone, PartialEq, Eq)]
/// Menu item.
pub struct MenuItem {
  text: CompactString,
  shortcut: Option<CompactString>,
  disabled: bool,
  separator: bool,
}

impl MenuItem {
  pub fn new(text: &str) -> Self {
    MenuItem {
      text: CompactString::from(text),
      shortcut: None,
      disabled: false,
      separator: false,
    }
  }

  /// Make a separator line, it cannot be selected.
  pub fn separator() -> Self {
    MenuItem {
      text: CompactString::default(),
      shortcut: None,
      disabled: false,
      separator: true,
    }
  }

  pub fn with_shortcut(mut self, shortcut: &str) -> Self {
    self.shortcut = Some(CompactString::from(shortcut));
    self
  }

  pub fn with_disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }

  pub fn text(&self) -> &CompactString {
    &self.text
  }

  pub fn shortcut(&self) -> Option<&CompactString> {
    self.shortcut.as_ref()
  }

  pub fn disabled(&self) -> bool {
    self.disabled
  }

  pub fn is_separator(&self) -> bool {
    self.separator
  }

  /// Whether the item can be selected.
  pub fn selectable(&self) -> bool {
    !self.separator && !self.disabled
  }

  fn width(&self) -> usize {
    let shortcut = self
      .shortcut
      .as_ref()
      .map(|s| strings::char_count(s) + 2)
      .unwrap_or(0);
    strings::char_count(&self.text) + shortcut
  }
}

#[derive(Debug, Clone)]
/// Shared menu style and items, drawn in one column with one row per item.
struct MenuBody<'a> {
  items: &'a [MenuItem],
  palette: &'a MenuPalette,
  transparency: Option<f32>,
  press_duration: Duration,
}

impl MenuBody<'_> {
  fn draw_item(
    &self,
    canvas: &mut dyn Compositor,
    shape: &IRect,
    row: isize,
    index: usize,
    pressed: bool,
  ) {
    let item = &self.items[index];
    let y = shape.y() + row;
    let line = xywh(shape.x(), y, shape.width(), 1);
    let (bg, fg) = if pressed {
      (self.palette.pressed_background, self.palette.pressed_foreground)
    } else if item.disabled {
      (self.palette.background, self.palette.disabled)
    } else {
      (self.palette.background, self.palette.foreground)
    };
    let transparency = if pressed { None } else { self.transparency };
    canvas.draw_rectangle(line, bg, fg, ' ', transparency);

    if item.separator {
      let text: String =
        std::iter::repeat_n(SEPARATOR_SYMBOL, shape.width().max(0) as usize).collect();
      canvas.draw_text(shape.x(), y, self.palette.separator, &text);
      return;
    }

    let inner_width = (shape.width() - 2).max(0) as usize;
    let shortcut_width = item
      .shortcut
      .as_ref()
      .map(|s| strings::char_count(s))
      .unwrap_or(0);
    let text_width = if shortcut_width > 0 {
      inner_width.saturating_sub(shortcut_width + 1)
    } else {
      inner_width
    };
    canvas.draw_text(shape.x() + 1, y, fg, &strings::truncate(&item.text, text_width));
    if let Some(shortcut) = &item.shortcut {
      let x = shape.right() - 1 - shortcut_width as isize;
      canvas.draw_text(x, y, fg, shortcut);
    }
  }

  fn draw(&self, canvas: &mut dyn Compositor, shape: &IRect, offset: usize) {
    for row in 0..shape.height() {
      let index = offset + row as usize;
      if index < self.items.len() {
        self.draw_item(canvas, shape, row, index, false);
      }
    }
  }

  /// Show the menu in `shape`, and wait for a selection.
  ///
  /// Returns the selected item text and its 1-based position.
  fn run(
    &self,
    canvas: &mut dyn Compositor,
    events: &mut dyn EventSource,
    shape: IRect,
  ) -> Option<(CompactString, usize)> {
    let shape = canvas.shape().intersect(&shape)?;
    let visible = shape.height().max(0) as usize;
    let max_offset = self.items.len().saturating_sub(visible);
    let mut offset = 0_usize;

    let mut guard = RegionGuard::new(canvas, shape);
    loop {
      self.draw(&mut *guard, &shape, offset);
      guard.flip(false);

      match pull_modal(events, None) {
        ModalPull::Unwind => return None,
        ModalPull::Timeout => continue,
        ModalPull::Event(Event::Touch { x, y, .. }) => {
          if !shape.contains_xy(x, y) {
            trace!("menu touched outside at ({:?},{:?})", x, y);
            return None;
          }
          let row = y - shape.y();
          let index = offset + row as usize;
          match self.items.get(index) {
            Some(item) if item.selectable() => {
              self.draw_item(&mut *guard, &shape, row, index, true);
              guard.flip(false);
              if !self.press_duration.is_zero() {
                std::thread::sleep(self.press_duration);
              }
              return Some((item.text.clone(), index + 1));
            }
            _ => { /* Separators and disabled items are ignored */ }
          }
        }
        ModalPull::Event(Event::Scroll { delta, .. }) => {
          if delta > 0 {
            offset = offset.saturating_sub(1);
          } else if delta < 0 {
            offset = (offset + 1).min(max_offset);
          }
        }
        ModalPull::Event(_) => { /* Skip */ }
      }
    }
  }
}

#[derive(Debug, Clone)]
/// Dropdown menu, shown at a position with a fixed width.
pub struct DropDownMenu {
  items: Vec<MenuItem>,
  width: isize,
  palette: MenuPalette,
  transparency: Option<f32>,
  press_duration: Duration,
}

impl DropDownMenu {
  pub fn new(width: isize, theme: &Theme) -> Self {
    DropDownMenu {
      items: vec![],
      width,
      palette: theme.menu,
      transparency: theme.menu_transparency,
      press_duration: *PRESS_DURATION,
    }
  }

  pub fn add_item(&mut self, item: MenuItem) {
    self.items.push(item);
  }

  pub fn add_separator(&mut self) {
    self.items.push(MenuItem::separator());
  }

  pub fn items(&self) -> &[MenuItem] {
    &self.items
  }

  pub fn item(&self, index: usize) -> Option<&MenuItem> {
    self.items.get(index)
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn width(&self) -> isize {
    self.width
  }

  pub fn set_width(&mut self, width: isize) {
    self.width = width;
  }

  pub fn set_press_duration(&mut self, duration: Duration) {
    self.press_duration = duration;
  }

  /// Show the menu with its top-left corner at `(x, y)`, and block until an item is
  /// touched or the menu is dismissed.
  ///
  /// Returns the selected item text and its 1-based position, or `None` if touched outside
  /// of the menu. Menus taller than the screen are cut, and scrolled by scroll events.
  pub fn show(
    &self,
    canvas: &mut dyn Compositor,
    events: &mut dyn EventSource,
    x: isize,
    y: isize,
  ) -> Option<(CompactString, usize)> {
    let body = MenuBody {
      items: &self.items,
      palette: &self.palette,
      transparency: self.transparency,
      press_duration: self.press_duration,
    };
    let shape = xywh(x, y, self.width, self.items.len() as isize);
    body.run(canvas, events, shape)
  }
}

#[derive(Debug, Clone)]
/// Context menu, its width fits the longest item and it's kept on-screen.
pub struct ContextMenu {
  items: Vec<MenuItem>,
  palette: MenuPalette,
  transparency: Option<f32>,
  press_duration: Duration,
}

impl ContextMenu {
  pub fn new(theme: &Theme) -> Self {
    ContextMenu {
      items: vec![],
      palette: theme.menu,
      transparency: theme.menu_transparency,
      press_duration: *PRESS_DURATION,
    }
  }

  pub fn add_item(&mut self, item: MenuItem) {
    self.items.push(item);
  }

  pub fn add_separator(&mut self) {
    self.items.push(MenuItem::separator());
  }

  pub fn items(&self) -> &[MenuItem] {
    &self.items
  }

  pub fn set_press_duration(&mut self, duration: Duration) {
    self.press_duration = duration;
  }

  /// Menu width: the longest label (with shortcut) plus one padding cell on each side.
  pub fn width(&self) -> isize {
    self.items.iter().map(|i| i.width()).max().unwrap_or(0) as isize + 2
  }

  /// The menu shape when shown at `(x, y)` on a screen with `screen` size.
  pub fn shape_at(&self, x: isize, y: isize, screen: USize) -> IRect {
    let shape = xywh(x, y, self.width(), self.items.len() as isize);
    crate::ui::tree::shapes::bound_position(&shape, &screen)
  }

  /// Show the menu at `(x, y)`, it moves left/up if it doesn't fit on the screen.
  ///
  /// See [`DropDownMenu::show`].
  pub fn show(
    &self,
    canvas: &mut dyn Compositor,
    events: &mut dyn EventSource,
    x: isize,
    y: isize,
  ) -> Option<(CompactString, usize)> {
    let body = MenuBody {
      items: &self.items,
      palette: &self.palette,
      transparency: self.transparency,
      press_duration: self.press_duration,
    };
    let shape = self.shape_at(x, y, canvas.size());
    body.run(canvas, events, shape)
  }
}
