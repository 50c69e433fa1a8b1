use super::label::*;

use crate::rect;
use crate::tests::canvas::row_symbols;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::make_tree;
use crate::ui::align::Alignment;
use crate::ui::theme::Theme;

#[test]
fn draw1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 3);
  let theme = Theme::default();
  tree
    .insert(tree.root_id(), Label::new(rect!(0, 0, 10, 1), "abc", &theme))
    .unwrap();
  let mut right = Label::new(rect!(0, 1, 10, 2), "xyz", &theme);
  right.set_alignment(Alignment::parse("right bottom").unwrap());
  tree.insert(tree.root_id(), right).unwrap();
  tree.draw(&mut canvas).unwrap();

  assert_eq!(row_symbols(&canvas, 0, 0, 10), "abc       ");
  assert_eq!(row_symbols(&canvas, 1, 0, 10), "          ");
  assert_eq!(row_symbols(&canvas, 2, 0, 10), "       xyz");
}

#[test]
fn truncate1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(10, 1);
  let theme = Theme::default();
  let id = tree
    .insert(tree.root_id(), Label::new(rect!(0, 0, 4, 1), "Hello world", &theme))
    .unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(row_symbols(&canvas, 0, 0, 6), "Hel…  ");

  tree.node_mut(id).unwrap().label_mut().unwrap().set_text("Hi");
  tree.draw(&mut canvas).unwrap();
  assert_eq!(row_symbols(&canvas, 0, 0, 6), "Hi    ");
}
