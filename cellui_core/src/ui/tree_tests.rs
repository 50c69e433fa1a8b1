use super::tree::*;

use crate::evloop::{Event, EventSource, MockEvent};
use crate::prelude::*;
use crate::rect;
use crate::size;
use crate::tests::canvas::{row_symbols, symbols};
use crate::tests::evloop::{key, make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::ui::canvas::{Canvas, Compositor, rgb};
use crate::ui::theme::Theme;
use crate::ui::widget::*;

use crossterm::event::KeyCode;
use crossterm::style::Color;
use std::time::Duration;

fn make_panel(shape: IRect, color: u32) -> Panel {
  let mut panel = Panel::new(shape, &Theme::default());
  panel.set_background(rgb(color));
  panel
}

fn make_switch(shape: IRect) -> Switch {
  Switch::new(shape, false, &Theme::default())
}

fn make_button(shape: IRect) -> Button {
  let mut button = Button::new(shape, "B", &Theme::default());
  button.set_press_duration(Duration::ZERO);
  button
}

#[test]
fn insert1() {
  test_log_init();

  let (mut tree, _canvas) = make_tree(10, 10);
  let root_id = tree.root_id();
  let c = tree.insert(root_id, Container::new(rect!(0, 0, 5, 5))).unwrap();
  let s = tree.insert(c, make_switch(rect!(0, 0, 2, 1))).unwrap();
  assert_eq!(tree.len(), 3);
  assert_eq!(tree.parent_id(s), Some(c));
  assert_eq!(tree.children_ids(root_id).unwrap(), &vec![c]);

  assert!(matches!(
    tree.insert(s, make_switch(rect!(0, 0, 2, 1))),
    Err(UiErr::NotContainer(id)) if id == s
  ));
  assert!(matches!(
    tree.insert(-1, make_switch(rect!(0, 0, 2, 1))),
    Err(UiErr::NodeNotFound(-1))
  ));
  assert_eq!(tree.len(), 3);
}

#[test]
fn remove1() {
  test_log_init();

  let (mut tree, _canvas) = make_tree(10, 10);
  let root_id = tree.root_id();
  let c = tree.insert(root_id, Container::new(rect!(0, 0, 5, 5))).unwrap();
  let s = tree.insert(c, make_switch(rect!(0, 0, 2, 1))).unwrap();

  let removed = tree.remove(c).unwrap();
  assert!(removed.container().is_some());
  assert!(!tree.contains(c));
  assert!(!tree.contains(s));
  assert_eq!(tree.len(), 1);

  assert!(matches!(tree.remove(root_id), Err(UiErr::RootNode(_))));
  assert!(matches!(tree.remove(c), Err(UiErr::NodeNotFound(_))));
}

#[test]
fn paint_order1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 2);
  let root_id = tree.root_id();
  let a = tree.insert(root_id, make_panel(rect!(0, 0, 4, 2), 0xFF0000)).unwrap();
  let b = tree.insert(root_id, make_panel(rect!(2, 0, 4, 2), 0x0000FF)).unwrap();
  assert_eq!(tree.index_of(a), Some(0));
  assert_eq!(tree.index_of(b), Some(1));

  tree.draw(&mut canvas).unwrap();
  assert_eq!(canvas.frame().get_cell(1, 0).unwrap().bg(), rgb(0xFF0000));
  assert_eq!(canvas.frame().get_cell(3, 0).unwrap().bg(), rgb(0x0000FF));

  tree.move_to_front(a).unwrap();
  assert_eq!(tree.index_of(a), Some(1));
  tree.draw(&mut canvas).unwrap();
  assert_eq!(canvas.frame().get_cell(3, 0).unwrap().bg(), rgb(0xFF0000));

  tree.move_backward(a).unwrap();
  assert_eq!(tree.index_of(a), Some(0));
  tree.move_forward(a).unwrap();
  assert_eq!(tree.index_of(a), Some(1));
  tree.move_to_back(a).unwrap();
  assert_eq!(tree.index_of(a), Some(0));
  assert!(matches!(tree.move_to_front(root_id), Err(UiErr::RootNode(_))));
}

#[test]
fn hit_test1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 2);
  let root_id = tree.root_id();
  let s1 = tree.insert(root_id, make_switch(rect!(0, 0, 4, 1))).unwrap();
  let s2 = tree.insert(root_id, make_switch(rect!(2, 0, 4, 1))).unwrap();
  tree.draw(&mut canvas).unwrap();

  // The later inserted sibling wins.
  let mut events = make_events(vec![touch(3, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(s2, true)]);

  tree.move_to_front(s1).unwrap();
  let mut events = make_events(vec![touch(3, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(s1, true)]);

  let mut events = make_events(vec![touch(8, 1)]);
  let dispatched = tree
    .dispatch(&Event::touch(8, 1), &mut events, &mut canvas)
    .unwrap();
  assert!(!dispatched.handled);
  assert!(dispatched.notices.is_empty());
}

#[test]
fn hidden_disabled1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 2);
  let root_id = tree.root_id();
  let s1 = tree.insert(root_id, make_switch(rect!(0, 0, 4, 1))).unwrap();
  let s2 = tree.insert(root_id, make_switch(rect!(2, 0, 4, 1))).unwrap();
  tree.draw(&mut canvas).unwrap();

  tree.set_hidden(s2, true).unwrap();
  let mut events = make_events(vec![touch(3, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(s1, true)]);

  // Disabled objects are drawn, but transparent to pointer events.
  tree.set_hidden(s2, false).unwrap();
  tree.set_disabled(s2, true).unwrap();
  let mut events = make_events(vec![touch(3, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(s1, false)]);
  assert_eq!(
    canvas.frame().get_cell(5, 0).unwrap().bg(),
    Theme::default().switch.passive
  );
}

#[test]
fn disabled_container1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 3);
  let c = tree
    .insert(tree.root_id(), Container::new(rect!(0, 0, 10, 3)))
    .unwrap();
  tree.insert(c, make_switch(rect!(0, 0, 4, 1))).unwrap();
  tree.set_disabled(c, true).unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![touch(1, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert!(notices.is_empty());
}

#[test]
fn clipping1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(12, 5);
  let c = tree
    .insert(tree.root_id(), Container::new(rect!(2, 2, 4, 2)))
    .unwrap();
  tree
    .insert(c, Label::new(rect!(2, 0, 10, 1), "abcdefghij", &theme))
    .unwrap();
  let s = tree.insert(c, make_switch(rect!(3, 1, 5, 1))).unwrap();
  tree.draw(&mut canvas).unwrap();

  // Children are clipped by their parent.
  assert_eq!(row_symbols(&canvas, 2, 0, 12), "    ab      ");
  assert_eq!(*tree.node(s).unwrap().actual_shape(), rect!(5, 3, 5, 1));
  assert_eq!(
    canvas.frame().get_cell(6, 3).unwrap().bg(),
    Color::Reset
  );

  let mut events = make_events(vec![touch(7, 3)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert!(notices.is_empty());

  let mut events = make_events(vec![touch(5, 3)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(s, true)]);
}

#[test]
fn draw_twice1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 6);
  let root_id = tree.root_id();
  let w = tree.insert(root_id, Window::new(rect!(1, 1, 12, 4), &theme)).unwrap();
  tree
    .insert(w, Label::new(rect!(1, 1, 8, 1), "hello", &theme))
    .unwrap();
  tree
    .insert(root_id, make_panel(rect!(8, 2, 10, 3), 0x00FF00))
    .unwrap();

  tree.draw(&mut canvas).unwrap();
  canvas.flip(false);
  let first = symbols(&canvas);
  tree.draw(&mut canvas).unwrap();
  canvas.flip(false);
  assert_eq!(symbols(&canvas), first);
  assert_eq!(canvas.last_flip_changes(), 0);
  assert_eq!(canvas.draw_limit(), canvas.shape());
}

#[test]
fn draw_twice_transparent1() {
  test_log_init();

  let mut tree = Tree::new(size!(10, 3));
  let mut canvas = Canvas::new(size!(10, 3));
  canvas.draw_rectangle(rect!(0, 0, 10, 3), rgb(0x204060), Color::Reset, ' ', None);
  let mut panel = make_panel(rect!(2, 0, 5, 2), 0xFFFFFF);
  panel.set_transparency(Some(0.5));
  tree.insert(tree.root_id(), panel).unwrap();

  tree.draw(&mut canvas).unwrap();
  let first = canvas.frame().clone();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(canvas.frame().cells(), first.cells());
  assert_eq!(canvas.frame().get_cell(0, 0).unwrap().bg(), Color::Reset);
}

#[test]
fn window_consumes1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(10, 5);
  let root_id = tree.root_id();
  let s = tree.insert(root_id, make_switch(rect!(0, 0, 10, 5))).unwrap();
  tree
    .insert(root_id, Window::new(rect!(2, 1, 5, 3), &theme))
    .unwrap();
  tree.draw(&mut canvas).unwrap();

  // Objects behind a window never see the events inside it.
  let mut events = make_events(vec![]);
  let dispatched = tree
    .dispatch(&Event::touch(3, 2), &mut events, &mut canvas)
    .unwrap();
  assert!(dispatched.handled);
  assert!(dispatched.notices.is_empty());
  assert!(!tree.node(s).unwrap().switch().unwrap().state());

  let dispatched = tree
    .dispatch(&Event::touch(0, 0), &mut events, &mut canvas)
    .unwrap();
  assert_eq!(dispatched.notices, vec![Notice::Toggled(s, true)]);
}

#[test]
fn observer1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 6);
  let root_id = tree.root_id();
  let w1 = tree.insert(root_id, Window::new(rect!(0, 0, 10, 5), &theme)).unwrap();
  let b = tree.insert(w1, make_button(rect!(1, 1, 3, 1))).unwrap();
  let w2 = tree.insert(root_id, Window::new(rect!(5, 0, 10, 5), &theme)).unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(tree.index_of(w2), Some(1));

  // The window handler runs after its child consumed the event.
  let mut events = make_events(vec![touch(2, 1)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Pressed(b)]);
  assert_eq!(tree.index_of(w1), Some(1));
  assert_eq!(tree.focused_window(), None);
}

#[test]
fn nested_windows1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 10);
  let outer = tree
    .insert(tree.root_id(), Window::new(rect!(0, 0, 20, 10), &theme))
    .unwrap();
  let inner = tree.insert(outer, Window::new(rect!(2, 2, 8, 4), &theme)).unwrap();
  tree.draw(&mut canvas).unwrap();

  // Only the inner window handles the event, the outer one skips it.
  let mut events = make_events(vec![touch(4, 4)]);
  dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(tree.focused_window(), Some(inner));
  assert!(!tree.node(outer).unwrap().window().unwrap().dragging());

  let mut events = make_events(vec![
    MockEvent::Event(Event::drag(6, 5)),
    MockEvent::Event(Event::drop(6, 5)),
  ]);
  dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(*tree.node(inner).unwrap().shape(), rect!(4, 3, 8, 4));
  assert_eq!(*tree.node(outer).unwrap().shape(), rect!(0, 0, 20, 10));
}

#[test]
fn non_pointer1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(10, 5);
  let w = tree
    .insert(tree.root_id(), Window::new(rect!(2, 1, 5, 3), &theme))
    .unwrap();
  tree.insert(w, make_switch(rect!(0, 0, 2, 1))).unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![]);
  let dispatched = tree
    .dispatch(&Event::key(KeyCode::Char('a')), &mut events, &mut canvas)
    .unwrap();
  assert!(!dispatched.handled);
  assert!(dispatched.notices.is_empty());
}

#[test]
fn window_actions1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(30, 15);
  let w = tree
    .insert(tree.root_id(), Window::new(rect!(2, 2, 10, 5), &theme))
    .unwrap();
  let [close, minimize, maximize] = tree.insert_window_actions(w, &theme).unwrap();
  for id in [close, minimize, maximize] {
    tree
      .node_mut(id)
      .unwrap()
      .button_mut()
      .unwrap()
      .set_press_duration(Duration::ZERO);
  }
  tree.draw(&mut canvas).unwrap();
  assert_eq!(row_symbols(&canvas, 2, 2, 5), "● ● ●");

  // Maximize, then restore.
  let mut events = make_events(vec![touch(6, 2)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(
    notices,
    vec![Notice::Pressed(maximize), Notice::WindowMaximized(w, true)]
  );
  assert_eq!(*tree.node(w).unwrap().shape(), rect!(0, 0, 30, 15));
  let mut events = make_events(vec![touch(4, 0)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(
    notices,
    vec![Notice::Pressed(maximize), Notice::WindowMaximized(w, false)]
  );
  assert_eq!(*tree.node(w).unwrap().shape(), rect!(2, 2, 10, 5));

  let mut events = make_events(vec![touch(4, 2)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(
    notices,
    vec![Notice::Pressed(minimize), Notice::WindowMinimized(w)]
  );
  assert!(tree.node(w).unwrap().hidden());

  tree.set_hidden(w, false).unwrap();
  tree.draw(&mut canvas).unwrap();
  let mut events = make_events(vec![touch(2, 2)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Pressed(close), Notice::WindowClosed(w)]);
  assert!(!tree.contains(w));
  assert!(!tree.contains(close));
}

#[test]
fn layout1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 10);
  let layout = tree
    .insert(tree.root_id(), Layout::new(rect!(0, 0, 20, 10), 2, 1).unwrap())
    .unwrap();
  let label = tree
    .insert(layout, Label::new(rect!(0, 0, 4, 1), "abcd", &theme))
    .unwrap();
  tree.set_cell_position(layout, label, 1, 0).unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(*tree.node(label).unwrap().shape(), rect!(13, 4, 4, 1));
  assert_eq!(row_symbols(&canvas, 4, 13, 4), "abcd");

  // Errors.
  let other = tree
    .insert(tree.root_id(), Label::new(rect!(0, 0, 4, 1), "x", &theme))
    .unwrap();
  assert!(matches!(
    tree.set_cell_position(layout, other, 0, 0),
    Err(UiErr::NotAChild { .. })
  ));
  assert!(matches!(
    tree.set_cell_position(tree.root_id(), other, 0, 0),
    Err(UiErr::InvalidGrid(_))
  ));
  assert!(matches!(
    tree.set_cell_position(layout, label, 2, 0),
    Err(UiErr::CellOutOfRange { .. })
  ));

  // A grid shrink strands the child, the next draw fails.
  tree
    .node_mut(layout)
    .unwrap()
    .layout_mut()
    .unwrap()
    .set_grid_size(1, 1)
    .unwrap();
  assert!(matches!(
    tree.draw(&mut canvas),
    Err(UiErr::CellOutOfRange { .. })
  ));
  assert_eq!(canvas.draw_limit(), canvas.shape());

  // Removed children are forgotten by the layout.
  tree.remove(label).unwrap();
  tree.draw(&mut canvas).unwrap();
}

#[test]
fn run1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 3);
  let b = tree.insert(tree.root_id(), make_button(rect!(0, 0, 3, 1))).unwrap();

  let mut events = make_events(vec![
    touch(1, 0),
    MockEvent::Event(Event::Interrupted),
    touch(1, 0),
  ]);
  let mut seen = vec![];
  tree
    .run(&mut events, &mut canvas, |_tree, notice| {
      seen.push(notice.clone());
      Flow::Continue
    })
    .unwrap();
  assert_eq!(seen, vec![Notice::Pressed(b)]);
  assert_eq!(events.remaining(), 1);
}

#[test]
fn run2() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 3);
  let b = tree.insert(tree.root_id(), make_button(rect!(0, 0, 3, 1))).unwrap();
  let l = tree
    .insert(tree.root_id(), Label::new(rect!(0, 2, 10, 1), "", &Theme::default()))
    .unwrap();

  let mut events = make_events(vec![touch(1, 0), key(KeyCode::Enter), touch(1, 0), touch(1, 0)]);
  let mut count = 0;
  tree
    .run(&mut events, &mut canvas, |tree, notice| {
      assert_eq!(*notice, Notice::Pressed(b));
      count += 1;
      if let Some(label) = tree.node_mut(l).and_then(|n| n.label_mut()) {
        label.set_text(&format!("pressed {}", count));
      }
      if count == 2 { Flow::Exit } else { Flow::Redraw }
    })
    .unwrap();
  assert_eq!(count, 2);
  assert_eq!(events.remaining(), 1);
  assert_eq!(row_symbols(&canvas, 2, 0, 9), "pressed 1");
  assert!(canvas.flips() > 0);
  events.pull(None);
  assert!(events.closed());
}
