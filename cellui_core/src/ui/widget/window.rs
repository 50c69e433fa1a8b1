//! Window, the draggable container.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::align::HorizontalAlignment;
use crate::ui::canvas::Compositor;
use crate::ui::theme::Theme;
use crate::ui::tree::*;
use crate::ui::util::strings;
use crate::ui::widget::{EventContext, TreeCommand, Widgetable};

use compact_str::CompactString;
use crossterm::style::Color;

#[derive(Debug, Clone)]
/// A container that moves to front when touched, and can be dragged by touching its empty
/// area.
///
/// NOTE: A window consumes all pointer events inside its bounds, even if none of its
/// children consumed them. Thus objects behind the window never see them.
pub struct Window {
  base: InodeBase,
  title: Option<CompactString>,
  title_color: Color,
  background: Option<Color>,
  draggable: bool,
  // Last touched position while dragging.
  last_touch: Option<(isize, isize)>,
  // The shape before maximized.
  restore_shape: Option<IRect>,
}

inode_impl!(Window);

impl Window {
  pub fn new(shape: IRect, theme: &Theme) -> Self {
    Window {
      base: InodeBase::new(shape),
      title: None,
      title_color: theme.window.title,
      background: Some(theme.window.background),
      draggable: true,
      last_touch: None,
      restore_shape: None,
    }
  }

  pub fn title(&self) -> Option<&CompactString> {
    self.title.as_ref()
  }

  pub fn set_title(&mut self, title: Option<&str>) {
    self.title = title.map(CompactString::from);
  }

  pub fn background(&self) -> Option<Color> {
    self.background
  }

  pub fn set_background(&mut self, background: Option<Color>) {
    self.background = background;
  }

  pub fn draggable(&self) -> bool {
    self.draggable
  }

  pub fn set_draggable(&mut self, value: bool) {
    self.draggable = value;
  }

  /// Whether the window is in dragging.
  pub fn dragging(&self) -> bool {
    self.last_touch.is_some()
  }

  pub fn maximized(&self) -> bool {
    self.restore_shape.is_some()
  }

  pub fn restore_shape(&self) -> Option<IRect> {
    self.restore_shape
  }

  pub fn set_restore_shape(&mut self, shape: Option<IRect>) {
    self.restore_shape = shape;
  }
}

impl Widgetable for Window {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    if let Some(bg) = self.background {
      canvas.draw_rectangle(actual, bg, bg, ' ', None);
    }
    if let Some(title) = &self.title {
      let text = strings::truncate(title, actual.width().max(0) as usize);
      let width = strings::char_count(&text) as isize;
      let x = actual.x() + HorizontalAlignment::Center.offset(width, actual.width());
      canvas.draw_text(x, actual.y(), self.title_color, &text);
    }
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    let id = self.id();
    match event {
      Event::Touch { x, y, .. } => {
        ctx.command(TreeCommand::MoveToFront(id));
        if self.draggable && !ctx.consumed_by_child() {
          trace!("window {:?} starts dragging at ({:?},{:?})", id, x, y);
          self.last_touch = Some((*x, *y));
          ctx.command(TreeCommand::Focus(id));
        }
      }
      Event::Drag { x, y, .. } => {
        if let Some((last_x, last_y)) = self.last_touch {
          let (dx, dy) = (x - last_x, y - last_y);
          if dx != 0 || dy != 0 {
            let shape = self.shape().offset(dx, dy);
            self.set_shape(shape);
            self.last_touch = Some((*x, *y));
            ctx.redraw();
          }
        }
      }
      Event::Drop { .. } => {
        if self.last_touch.take().is_some() {
          ctx.command(TreeCommand::Unfocus);
        }
      }
      _ => { /* Skip */ }
    }
    Ok(())
  }
}
