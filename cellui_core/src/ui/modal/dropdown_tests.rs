use super::dropdown::*;

use crate::evloop::{Event, EventSource, MockEvent};
use crate::prelude::*;
use crate::rect;
use crate::size;
use crate::tests::canvas::{make_canvas, symbols};
use crate::tests::evloop::{make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::ui::canvas::{Canvas, Compositor};
use crate::ui::theme::Theme;

use crossterm::style::Color;
use std::time::Duration;

fn make_background(width: usize, height: usize) -> Canvas {
  let mut canvas = make_canvas(width, height);
  let shape = canvas.shape();
  canvas.draw_rectangle(shape, Color::Black, Color::White, '.', None);
  canvas
}

fn make_menu(items: &[&str]) -> DropDownMenu {
  let mut menu = DropDownMenu::new(6, &Theme::default());
  menu.set_press_duration(Duration::ZERO);
  for item in items {
    menu.add_item(MenuItem::new(item));
  }
  menu
}

#[test]
fn select1() {
  test_log_init();

  let mut canvas = make_background(20, 10);
  let before = symbols(&canvas);
  let menu = make_menu(&["A", "B", "C"]);
  let mut events = make_events(vec![touch(3, 3)]);

  let selected = menu.show(&mut canvas, &mut events, 1, 2);
  assert_eq!(selected, Some(("B".into(), 2)));
  assert_eq!(symbols(&canvas), before);
  assert!(canvas.flips() > 0);
}

#[test]
fn outside1() {
  test_log_init();

  let mut canvas = make_background(20, 10);
  let before = symbols(&canvas);
  let menu = make_menu(&["A", "B", "C"]);
  let mut events = make_events(vec![touch(15, 8), touch(3, 3)]);

  let selected = menu.show(&mut canvas, &mut events, 1, 2);
  assert_eq!(selected, None);
  assert_eq!(symbols(&canvas), before);
  // The touch after dismissing is left for the outer loop.
  assert_eq!(events.remaining(), 1);
}

#[test]
fn skip_separator1() {
  test_log_init();

  let mut canvas = make_background(20, 10);
  let mut menu = make_menu(&["A"]);
  menu.add_separator();
  menu.add_item(MenuItem::new("C").with_disabled(true));
  menu.add_item(MenuItem::new("D").with_shortcut("^D"));
  assert!(!menu.item(1).unwrap().selectable());
  assert!(!menu.item(2).unwrap().selectable());

  let mut events = make_events(vec![touch(1, 1), touch(1, 2), touch(1, 3)]);
  let selected = menu.show(&mut canvas, &mut events, 0, 0);
  assert_eq!(selected, Some(("D".into(), 4)));
  assert_eq!(events.pulled(), 3);
}

#[test]
fn scroll1() {
  test_log_init();

  let mut canvas = make_background(10, 3);
  let menu = make_menu(&["A", "B", "C", "D", "E"]);
  let mut events = make_events(vec![
    MockEvent::Event(Event::scroll(1, 1, -1)),
    MockEvent::Event(Event::scroll(1, 1, -1)),
    MockEvent::Event(Event::scroll(1, 1, -1)),
    touch(1, 2),
  ]);

  // Menu is cut by the screen, and scrolled at most 2 rows.
  let selected = menu.show(&mut canvas, &mut events, 0, 0);
  assert_eq!(selected, Some(("E".into(), 5)));
}

#[test]
fn interrupted1() {
  test_log_init();

  let mut canvas = make_background(20, 10);
  let before = symbols(&canvas);
  let menu = make_menu(&["A", "B", "C"]);
  let mut events = make_events(vec![MockEvent::Event(Event::Interrupted), touch(3, 3)]);

  let selected = menu.show(&mut canvas, &mut events, 1, 2);
  assert_eq!(selected, None);
  assert_eq!(symbols(&canvas), before);
  // The interrupted signal is pushed back for the outer loops.
  assert_eq!(events.pull(None), Some(Event::touch(3, 3)));
  assert_eq!(events.pull(None), Some(Event::Interrupted));
}

#[test]
fn closed1() {
  test_log_init();

  let mut canvas = make_background(20, 10);
  let menu = make_menu(&["A", "B", "C"]);
  let mut events = make_events(vec![]);
  assert_eq!(menu.show(&mut canvas, &mut events, 1, 2), None);
}

#[test]
fn context_menu1() {
  test_log_init();

  let theme = Theme::default();
  let mut menu = ContextMenu::new(&theme);
  menu.set_press_duration(Duration::ZERO);
  menu.add_item(MenuItem::new("Open").with_shortcut("^O"));
  menu.add_separator();
  menu.add_item(MenuItem::new("Remove"));
  assert_eq!(menu.width(), 10);

  // Kept on screen.
  assert_eq!(menu.shape_at(18, 9, size!(20, 10)), rect!(10, 7, 10, 3));
  assert_eq!(menu.shape_at(2, 1, size!(20, 10)), rect!(2, 1, 10, 3));

  let mut canvas = make_background(20, 10);
  let before = symbols(&canvas);
  let mut events = make_events(vec![touch(12, 9)]);
  let selected = menu.show(&mut canvas, &mut events, 18, 9);
  assert_eq!(selected, Some(("Remove".into(), 3)));
  assert_eq!(symbols(&canvas), before);
}
