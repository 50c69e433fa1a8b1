use super::combo_box::*;

use crate::prelude::*;
use crate::rect;
use crate::tests::canvas::{row_symbols, symbols};
use crate::tests::evloop::{make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::ui::theme::Theme;
use crate::ui::widget::Notice;

use std::time::Duration;

fn make_combo_box() -> ComboBox {
  let mut combo = ComboBox::new(rect!(1, 1, 10, 1), &Theme::default());
  combo.set_press_duration(Duration::ZERO);
  for item in ["Apple", "Banana", "Cherry"] {
    combo.add_item(item);
  }
  combo
}

#[test]
fn select1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(20, 10);
  let id = tree.insert(tree.root_id(), make_combo_box()).unwrap();
  tree.draw(&mut canvas).unwrap();
  let before = symbols(&canvas);
  assert_eq!(row_symbols(&canvas, 1, 1, 10), "         ▼");

  // The menu shows below the combo box, one row per item.
  let mut events = make_events(vec![touch(2, 1), touch(2, 4)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Selected(id, 2, "Cherry".into())]);

  let combo = tree.node(id).unwrap().combo_box().unwrap();
  assert_eq!(combo.selected_item(), Some(2));
  assert_eq!(combo.selected_text().unwrap(), "Cherry");
  assert_eq!(row_symbols(&canvas, 1, 1, 10), " Cherry  ▼");
  assert_eq!(symbols(&canvas)[4], before[4]);
}

#[test]
fn dismiss1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(20, 10);
  let mut combo = make_combo_box();
  combo.set_selected_item(Some(0));
  let id = tree.insert(tree.root_id(), combo).unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![touch(2, 1), touch(15, 8)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert!(notices.is_empty());
  assert_eq!(tree.node(id).unwrap().combo_box().unwrap().selected_item(), Some(0));
}

#[test]
fn set_selected_item1() {
  let mut combo = make_combo_box();
  combo.set_selected_item(Some(1));
  assert_eq!(combo.selected_text().unwrap(), "Banana");
  combo.set_selected_item(Some(3));
  assert_eq!(combo.selected_item(), None);
  combo.set_selected_item(Some(1));
  combo.clear();
  assert_eq!(combo.selected_item(), None);
  assert!(combo.items().is_empty());
}
