use super::panel::*;

use crate::rect;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::make_tree;
use crate::ui::canvas::rgb;
use crate::ui::theme::Theme;

#[test]
fn opaque1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(6, 2);
  let theme = Theme::default();
  let mut panel = Panel::new(rect!(1, 0, 4, 2), &theme);
  panel.set_background(rgb(0x102030));
  tree.insert(tree.root_id(), panel).unwrap();
  tree.draw(&mut canvas).unwrap();

  let frame = canvas.frame();
  assert_eq!(frame.get_cell(0, 0).unwrap().bg(), crossterm::style::Color::Reset);
  assert_eq!(frame.get_cell(1, 0).unwrap().bg(), rgb(0x102030));
  assert_eq!(frame.get_cell(4, 1).unwrap().bg(), rgb(0x102030));
  assert_eq!(frame.get_cell(5, 1).unwrap().bg(), crossterm::style::Color::Reset);
}

#[test]
fn transparent1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(4, 1);
  let theme = Theme::default();
  let mut below = Panel::new(rect!(0, 0, 4, 1), &theme);
  below.set_background(rgb(0x000000));
  tree.insert(tree.root_id(), below).unwrap();

  let mut above = Panel::new(rect!(2, 0, 4, 1), &theme);
  above.set_background(rgb(0xFFFFFF));
  above.set_transparency(Some(0.5));
  tree.insert(tree.root_id(), above).unwrap();
  tree.draw(&mut canvas).unwrap();

  let frame = canvas.frame();
  assert_eq!(frame.get_cell(1, 0).unwrap().bg(), rgb(0x000000));
  assert_eq!(frame.get_cell(2, 0).unwrap().bg(), rgb(0x808080));
  assert_eq!(frame.get_cell(3, 0).unwrap().bg(), rgb(0x808080));
}

#[test]
fn transparency_clamped1() {
  let theme = Theme::default();
  let mut panel = Panel::new(rect!(0, 0, 1, 1), &theme);
  assert_eq!(panel.transparency(), None);
  panel.set_transparency(Some(1.5));
  assert_eq!(panel.transparency(), Some(1.0));
  panel.set_transparency(Some(-1.0));
  assert_eq!(panel.transparency(), Some(0.0));
}
