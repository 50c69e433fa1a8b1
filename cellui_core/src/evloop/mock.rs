//! Mocked event source.

use crate::evloop::{Event, EventSource};

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
  Event(Event),

  /// Make the next `pull` time out, i.e. returns `None`.
  Timeout,
}

impl From<Event> for MockEvent {
  fn from(value: Event) -> Self {
    MockEvent::Event(value)
  }
}

#[derive(Debug, Default)]
/// Scripted event source, it replays a queue of events and timeouts.
///
/// Once the queue is exhausted the source is closed, thus blocking loops exit instead of
/// waiting forever.
pub struct MockEventSource {
  queue: VecDeque<MockEvent>,
  pulled: usize,
}

impl MockEventSource {
  pub fn new<I, E>(events: I) -> Self
  where
    I: IntoIterator<Item = E>,
    E: Into<MockEvent>,
  {
    MockEventSource {
      queue: events.into_iter().map(|e| e.into()).collect(),
      pulled: 0,
    }
  }

  /// Append a scripted event.
  pub fn enqueue<E: Into<MockEvent>>(&mut self, event: E) {
    self.queue.push_back(event.into());
  }

  /// Count of pulled items (events and timeouts).
  pub fn pulled(&self) -> usize {
    self.pulled
  }

  /// Remaining items.
  pub fn remaining(&self) -> usize {
    self.queue.len()
  }
}

impl EventSource for MockEventSource {
  fn pull(&mut self, _timeout: Option<Duration>) -> Option<Event> {
    match self.queue.pop_front() {
      Some(MockEvent::Event(e)) => {
        self.pulled += 1;
        Some(e)
      }
      Some(MockEvent::Timeout) => {
        self.pulled += 1;
        None
      }
      None => None,
    }
  }

  fn push(&mut self, event: Event) {
    self.queue.push_back(MockEvent::Event(event));
  }

  fn closed(&self) -> bool {
    self.queue.is_empty()
  }
}
