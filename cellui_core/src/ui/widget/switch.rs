//! Switch.

use crate::evloop::Event;
use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::theme::{SwitchPalette, Theme};
use crate::ui::tree::*;
use crate::ui::widget::{EventContext, Notice, Widgetable};

#[derive(Debug, Clone)]
/// Boolean toggle, the pipe stays on the left when off and on the right when on.
pub struct Switch {
  base: InodeBase,
  state: bool,
  palette: SwitchPalette,
}

inode_impl!(Switch);

impl Switch {
  pub fn new(shape: IRect, state: bool, theme: &Theme) -> Self {
    Switch {
      base: InodeBase::new(shape),
      state,
      palette: theme.switch,
    }
  }

  pub fn state(&self) -> bool {
    self.state
  }

  pub fn set_state(&mut self, state: bool) {
    self.state = state;
  }
}

impl Widgetable for Switch {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    let bg = if self.state {
      self.palette.active
    } else {
      self.palette.passive
    };
    canvas.draw_rectangle(actual, bg, bg, ' ', None);
    let pipe_width = (actual.width() / 2).max(1);
    let pipe_x = if self.state {
      actual.right() - pipe_width
    } else {
      actual.x()
    };
    canvas.draw_rectangle(
      xywh(pipe_x, actual.y(), pipe_width, actual.height()),
      self.palette.pipe,
      self.palette.pipe,
      ' ',
      None,
    );
  }

  fn handle_event(&mut self, ctx: &mut EventContext, event: &Event) -> UiResult<()> {
    if let Event::Touch { .. } = event {
      self.state = !self.state;
      ctx.notify(Notice::Toggled(self.id(), self.state));
      ctx.redraw();
    }
    Ok(())
  }
}
