//! Events and event sources.
//!
//! The toolkit never owns the host event source, it only consumes the [`EventSource`]
//! contract: a blocking `pull` with an optional timeout. Every loop in the toolkit (the
//! outer [`Tree::run`](crate::ui::tree::Tree::run) loop and the nested modal loops) reads
//! from the same source, so events are always processed in arrival order.

use crate::prelude::*;

use compact_str::CompactString;
use crossterm::event::KeyCode;
use std::time::Duration;

// Re-export
pub use mock::*;

pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display)]
/// A tagged event record.
///
/// Pointer events (touch/drag/drop/scroll) carry the screen position they happened at,
/// they're hit-tested against the widget tree. All other events are delivered to every
/// handler in scope.
pub enum Event {
  /// Pointer pressed.
  Touch { x: isize, y: isize, button: u8 },

  /// Pointer moved while pressed.
  Drag { x: isize, y: isize, button: u8 },

  /// Pointer released.
  Drop { x: isize, y: isize, button: u8 },

  /// Wheel scrolled, `delta > 0` scrolls up and `delta < 0` scrolls down.
  Scroll { x: isize, y: isize, delta: isize },

  /// Key pressed.
  KeyDown { code: KeyCode },

  /// Key released.
  KeyUp { code: KeyCode },

  /// Text pasted from clipboard.
  Clipboard { text: CompactString },

  /// Application termination signal. Every active loop must observe it and unwind.
  Interrupted,

  /// Any other signal from the host (network messages, timers, etc).
  Custom {
    name: CompactString,
    payload: Vec<CompactString>,
  },
}

impl Event {
  /// Make a touch event with the primary button.
  pub fn touch(x: isize, y: isize) -> Self {
    Event::Touch { x, y, button: 0 }
  }

  /// Make a drag event with the primary button.
  pub fn drag(x: isize, y: isize) -> Self {
    Event::Drag { x, y, button: 0 }
  }

  /// Make a drop event with the primary button.
  pub fn drop(x: isize, y: isize) -> Self {
    Event::Drop { x, y, button: 0 }
  }

  /// Make a scroll event.
  pub fn scroll(x: isize, y: isize, delta: isize) -> Self {
    Event::Scroll { x, y, delta }
  }

  /// Make a key down event.
  pub fn key(code: KeyCode) -> Self {
    Event::KeyDown { code }
  }

  /// Whether it is a pointer event that requires hit-testing.
  pub fn is_pointer(&self) -> bool {
    self.position().is_some()
  }

  /// The screen position of a pointer event.
  pub fn position(&self) -> Option<(isize, isize)> {
    match self {
      Event::Touch { x, y, .. }
      | Event::Drag { x, y, .. }
      | Event::Drop { x, y, .. }
      | Event::Scroll { x, y, .. } => Some((*x, *y)),
      _ => None,
    }
  }
}

/// The host event source.
pub trait EventSource {
  /// Wait for the next event.
  ///
  /// Returns `None` if the `timeout` elapsed, or the source is closed (see
  /// [`closed`](EventSource::closed)). Without timeout, it blocks until an event arrives.
  fn pull(&mut self, timeout: Option<Duration>) -> Option<Event>;

  /// Push an event to the end of the queue, it will be pulled again later.
  fn push(&mut self, event: Event);

  /// Whether the source will never produce events any more.
  fn closed(&self) -> bool {
    false
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a modal loop pulled from the event source.
pub enum ModalPull {
  Event(Event),

  /// The waiting timeout elapsed without any event.
  Timeout,

  /// The loop should unwind: the source is closed, or the [`Event::Interrupted`] signal
  /// arrived (it's pushed back to the source so outer loops observe it as well).
  Unwind,
}

/// Wait for the next event inside a modal loop.
pub fn pull_modal(
  events: &mut dyn EventSource,
  timeout: Option<Duration>,
) -> ModalPull {
  match events.pull(timeout) {
    Some(Event::Interrupted) => {
      trace!("modal loop interrupted");
      events.push(Event::Interrupted);
      ModalPull::Unwind
    }
    Some(event) => ModalPull::Event(event),
    None => {
      if events.closed() {
        trace!("modal loop exits on closed source");
        ModalPull::Unwind
      } else {
        ModalPull::Timeout
      }
    }
  }
}
