use super::progress_bar::*;

use crate::rect;
use crate::tests::canvas::row_symbols;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::make_tree;
use crate::ui::theme::Theme;

#[test]
fn value1() {
  let theme = Theme::default();
  let mut bar = ProgressBar::new(rect!(0, 0, 10, 2), 50, &theme);
  assert_eq!(bar.active_width(), 5);
  bar.set_value(150);
  assert_eq!(bar.value(), 100);
  assert_eq!(bar.active_width(), 10);
  bar.set_value(0);
  assert_eq!(bar.active_width(), 0);
}

#[test]
fn draw1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(10, 2);
  let mut bar = ProgressBar::new(rect!(0, 0, 10, 2), 30, &theme);
  bar.set_show_value(true);
  tree.insert(tree.root_id(), bar).unwrap();
  tree.draw(&mut canvas).unwrap();

  assert_eq!(row_symbols(&canvas, 0, 0, 10), "━━━━━━━━━━");
  assert_eq!(row_symbols(&canvas, 1, 0, 10), "   30%    ");
  let active = canvas.frame().get_cell(2, 0).unwrap();
  assert_eq!(active.fg(), theme.progress_bar.active);
  let passive = canvas.frame().get_cell(3, 0).unwrap();
  assert_eq!(passive.fg(), theme.progress_bar.passive);
}
