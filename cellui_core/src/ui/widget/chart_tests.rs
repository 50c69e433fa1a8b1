use super::chart::*;

use crate::rect;
use crate::tests::canvas::row_symbols;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::make_tree;
use crate::ui::theme::Theme;

#[test]
fn bounds1() {
  let mut chart = Chart::new(rect!(0, 0, 12, 6), &Theme::default());
  assert_eq!(chart.bounds(), None);
  chart.set_values(vec![(0.0, 3.0), (10.0, 5.0), (4.0, 0.0)]);
  assert_eq!(chart.bounds(), Some((0.0, 10.0, 0.0, 5.0)));
}

#[test]
fn draw1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(12, 6);
  let mut chart = Chart::new(rect!(0, 0, 12, 6), &Theme::default());
  chart.add_value(0.0, 0.0);
  chart.add_value(10.0, 5.0);
  assert_eq!(chart.value_position(0.0, 0.0), Some((3, 3)));
  assert_eq!(chart.value_position(10.0, 5.0), Some((11, 0)));
  tree.insert(tree.root_id(), chart).unwrap();
  tree.draw(&mut canvas).unwrap();

  assert_eq!(row_symbols(&canvas, 0, 0, 12), "5 │        •");
  assert_eq!(row_symbols(&canvas, 1, 0, 12), "  │         ");
  assert_eq!(row_symbols(&canvas, 3, 0, 12), "0 │•        ");
  assert_eq!(row_symbols(&canvas, 4, 0, 12), "  └─────────");
  assert_eq!(row_symbols(&canvas, 5, 0, 12), "   0      10");
}

#[test]
fn empty1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(6, 3);
  tree
    .insert(tree.root_id(), Chart::new(rect!(0, 0, 6, 3), &Theme::default()))
    .unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(row_symbols(&canvas, 0, 0, 6), " │    ");
  assert_eq!(row_symbols(&canvas, 1, 0, 6), " └────");
}
