//! Basic atom of all UI components.

use crate::evloop::{Event, EventSource};
use crate::prelude::*;
use crate::ui::canvas::Compositor;
use crate::ui::tree::TreeNodeId;

use compact_str::CompactString;
use crossterm::style::Color;
use std::path::PathBuf;
use std::time::Duration;

// Re-export
pub use button::*;
pub use chart::*;
pub use code_view::*;
pub use color_selector::*;
pub use combo_box::*;
pub use container::*;
pub use image::*;
pub use input::*;
pub use label::*;
pub use layout::*;
pub use panel::*;
pub use progress_bar::*;
pub use scroll_bar::*;
pub use slider::*;
pub use switch::*;
pub use text_box::*;
pub use tree_view::*;
pub use window::*;

pub mod button;
pub mod chart;
pub mod code_view;
pub mod color_selector;
pub mod combo_box;
pub mod container;
pub mod image;
pub mod input;
pub mod label;
pub mod layout;
pub mod panel;
pub mod progress_bar;
pub mod scroll_bar;
pub mod slider;
pub mod switch;
pub mod text_box;
pub mod tree_view;
pub mod window;

#[cfg(test)]
mod chart_tests;
#[cfg(test)]
mod code_view_tests;
#[cfg(test)]
mod combo_box_tests;
#[cfg(test)]
mod image_tests;
#[cfg(test)]
mod label_tests;
#[cfg(test)]
mod panel_tests;
#[cfg(test)]
mod progress_bar_tests;
#[cfg(test)]
mod scroll_bar_tests;
#[cfg(test)]
mod slider_tests;
#[cfg(test)]
mod switch_tests;

#[derive(Debug, Clone, PartialEq)]
/// Typed notification emitted by interactive widgets, the application observes them in the
/// callback of [`Tree::run`](crate::ui::tree::Tree::run).
pub enum Notice {
  /// Button pressed (and released).
  Pressed(TreeNodeId),

  /// Switch, or button in switch mode, changed its state.
  Toggled(TreeNodeId, bool),

  /// Slider or scroll bar changed its value.
  ValueChanged(TreeNodeId, f64),

  /// Combo box selected an item, with the item index (0-based) and text.
  Selected(TreeNodeId, usize, CompactString),

  /// Input finished editing with an accepted text.
  InputFinished(TreeNodeId, CompactString),

  /// Tree view selected a file.
  TreeItemSelected(TreeNodeId, PathBuf),

  /// Tree view expanded (`true`) or collapsed (`false`) a directory.
  TreeItemToggled(TreeNodeId, PathBuf, bool),

  /// Color selector picked a color.
  ColorSelected(TreeNodeId, Color),

  WindowClosed(TreeNodeId),

  WindowMinimized(TreeNodeId),

  /// Window maximized (`true`) or restored (`false`).
  WindowMaximized(TreeNodeId, bool),
}

impl Notice {
  /// The node that emits this notice.
  pub fn id(&self) -> TreeNodeId {
    match self {
      Notice::Pressed(id)
      | Notice::Toggled(id, _)
      | Notice::ValueChanged(id, _)
      | Notice::Selected(id, _, _)
      | Notice::InputFinished(id, _)
      | Notice::TreeItemSelected(id, _)
      | Notice::TreeItemToggled(id, _, _)
      | Notice::ColorSelected(id, _)
      | Notice::WindowClosed(id)
      | Notice::WindowMinimized(id)
      | Notice::WindowMaximized(id, _) => *id,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Tree mutation requested by a handler, it's applied after the dispatch recursion ends.
pub enum TreeCommand {
  MoveToFront(TreeNodeId),

  /// Focus a window, the following drag/drop events are routed to it directly.
  Focus(TreeNodeId),

  Unfocus,

  /// Remove a window.
  Close(TreeNodeId),

  /// Hide a window.
  Minimize(TreeNodeId),

  /// Maximize a window to its parent size, or restore it if it's already maximized.
  Maximize(TreeNodeId),
}

#[derive(Debug, Default)]
/// Collected side effects of all handlers in one dispatch.
pub struct Effects {
  pub redraw: bool,
  pub latched: Vec<(TreeNodeId, Duration)>,
  pub notices: Vec<Notice>,
  pub commands: Vec<TreeCommand>,
}

/// The context passed to event handlers.
///
/// It gives a handler the compositor and the event source (modal widgets run their own
/// loops on them), and collects the handler's side effects: redraw requests, notices and
/// tree commands.
pub struct EventContext<'a> {
  serial: u64,
  id: TreeNodeId,
  window_id: Option<TreeNodeId>,
  consumed: bool,
  events: &'a mut dyn EventSource,
  canvas: &'a mut dyn Compositor,
  effects: Effects,
}

impl<'a> EventContext<'a> {
  pub fn new(
    serial: u64,
    events: &'a mut dyn EventSource,
    canvas: &'a mut dyn Compositor,
  ) -> Self {
    EventContext {
      serial,
      id: 0,
      window_id: None,
      consumed: false,
      events,
      canvas,
      effects: Effects::default(),
    }
  }

  /// Point the context to the node whose handler is going to be called.
  pub fn target(
    &mut self,
    id: TreeNodeId,
    window_id: Option<TreeNodeId>,
    consumed: bool,
  ) {
    self.id = id;
    self.window_id = window_id;
    self.consumed = consumed;
  }

  /// Serial number of the event being dispatched.
  pub fn serial(&self) -> u64 {
    self.serial
  }

  /// The node whose handler is called.
  pub fn id(&self) -> TreeNodeId {
    self.id
  }

  /// The nearest window that contains the node, or the node itself if it's a window.
  pub fn window_id(&self) -> Option<TreeNodeId> {
    self.window_id
  }

  /// For container handlers, whether a child already consumed the event.
  pub fn consumed_by_child(&self) -> bool {
    self.consumed
  }

  pub fn canvas(&mut self) -> &mut dyn Compositor {
    &mut *self.canvas
  }

  pub fn events(&mut self) -> &mut dyn EventSource {
    &mut *self.events
  }

  /// Both the compositor and the event source, for running a modal loop.
  pub fn io(&mut self) -> (&mut dyn Compositor, &mut dyn EventSource) {
    (&mut *self.canvas, &mut *self.events)
  }

  /// Ask for a redraw of the whole tree once the dispatch ends.
  pub fn redraw(&mut self) {
    self.effects.redraw = true;
  }

  /// Keep the current node latched for `duration`: the tree is drawn and flipped, then
  /// after `duration` the node is [released](Widgetable::release).
  pub fn latch(&mut self, duration: Duration) {
    self.effects.latched.push((self.id, duration));
    self.effects.redraw = true;
  }

  pub fn notify(&mut self, notice: Notice) {
    trace!("notice:{:?}", notice);
    self.effects.notices.push(notice);
  }

  pub fn command(&mut self, command: TreeCommand) {
    trace!("command:{:?}", command);
    self.effects.commands.push(command);
    self.effects.redraw = true;
  }

  pub fn into_effects(self) -> Effects {
    self.effects
  }
}

/// Base trait for all UI widgets.
pub trait Widgetable {
  /// Draw the widget to canvas, on its actual shape.
  fn draw(&mut self, _canvas: &mut dyn Compositor) {
    // Do nothing.
  }

  /// Handle an event.
  fn handle_event(
    &mut self,
    _ctx: &mut EventContext,
    _event: &Event,
  ) -> UiResult<()> {
    // Do nothing.
    Ok(())
  }

  /// Release a latched widget, see [`EventContext::latch`].
  fn release(&mut self) -> Option<Notice> {
    None
  }
}

/// Implement [`Widgetable`] for an enum whose variants all implement it.
#[macro_export]
macro_rules! widget_enum_dispatcher {
  ($enum:ident, $($variant:tt),*) => {
    impl $crate::ui::widget::Widgetable for $enum {
      fn draw(&mut self, canvas: &mut dyn $crate::ui::canvas::Compositor) {
        match self {
          $(
            $enum::$variant(w) => $crate::ui::widget::Widgetable::draw(w, canvas),
          )*
        }
      }

      fn handle_event(
        &mut self,
        ctx: &mut $crate::ui::widget::EventContext,
        event: &$crate::evloop::Event,
      ) -> $crate::results::UiResult<()> {
        match self {
          $(
            $enum::$variant(w) => $crate::ui::widget::Widgetable::handle_event(w, ctx, event),
          )*
        }
      }

      fn release(&mut self) -> Option<$crate::ui::widget::Notice> {
        match self {
          $(
            $enum::$variant(w) => $crate::ui::widget::Widgetable::release(w),
          )*
        }
      }
    }
  };
}
