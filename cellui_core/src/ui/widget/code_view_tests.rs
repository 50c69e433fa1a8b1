use super::code_view::*;

use crate::evloop::{Event, MockEvent};
use crate::rect;
use crate::tests::canvas::row_symbols;
use crate::tests::evloop::make_events;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::ui::theme::Theme;

fn make_text(n: usize) -> String {
  (0..n)
    .map(|i| format!("line{}", i + 1))
    .collect::<Vec<_>>()
    .join("\n")
}

#[test]
fn gutter1() {
  let theme = Theme::default();
  let view = CodeView::new(rect!(0, 0, 10, 3), &make_text(9), &theme);
  assert_eq!(view.gutter_width(), 3);
  let view = CodeView::new(rect!(0, 0, 10, 3), &make_text(12), &theme);
  assert_eq!(view.gutter_width(), 4);
}

#[test]
fn draw1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(12, 3);
  let mut view = CodeView::new(rect!(0, 0, 12, 3), &make_text(12), &theme);
  view.highlight(1, true);
  let id = tree.insert(tree.root_id(), view).unwrap();
  tree.draw(&mut canvas).unwrap();

  assert_eq!(row_symbols(&canvas, 0, 0, 12), "  1 line1   ");
  assert_eq!(row_symbols(&canvas, 1, 0, 12), "  2 line2   ");
  assert_eq!(canvas.frame().get_cell(5, 1).unwrap().bg(), theme.code_view.highlight);
  assert_eq!(canvas.frame().get_cell(5, 0).unwrap().bg(), theme.code_view.background);
  assert_eq!(canvas.frame().get_cell(0, 0).unwrap().bg(), theme.code_view.gutter_background);

  let view = tree.node_mut(id).unwrap().code_view_mut().unwrap();
  view.set_from_symbol(3);
  view.set_from_line(100);
  assert_eq!(view.from_line(), 9);
  tree.draw(&mut canvas).unwrap();
  assert_eq!(row_symbols(&canvas, 0, 0, 12), " 10 e10     ");
}

#[test]
fn scroll1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(12, 3);
  let id = tree
    .insert(tree.root_id(), CodeView::new(rect!(0, 0, 12, 3), &make_text(4), &theme))
    .unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![
    MockEvent::Event(Event::scroll(5, 1, -1)),
    MockEvent::Event(Event::scroll(5, 1, -1)),
  ]);
  dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(tree.node(id).unwrap().code_view().unwrap().from_line(), 1);
  assert_eq!(row_symbols(&canvas, 2, 0, 8), " 4 line4");
}
