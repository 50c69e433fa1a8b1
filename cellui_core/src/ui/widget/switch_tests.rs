use super::switch::*;

use crate::rect;
use crate::tests::evloop::{make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::ui::theme::Theme;
use crate::ui::widget::Notice;

#[test]
fn toggle1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(10, 2);
  let id = tree
    .insert(tree.root_id(), Switch::new(rect!(0, 0, 4, 1), false, &theme))
    .unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(canvas.frame().get_cell(0, 0).unwrap().bg(), theme.switch.pipe);
  assert_eq!(canvas.frame().get_cell(3, 0).unwrap().bg(), theme.switch.passive);

  let mut events = make_events(vec![touch(1, 0), touch(5, 1)]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(notices, vec![Notice::Toggled(id, true)]);
  assert!(tree.node(id).unwrap().switch().unwrap().state());
  assert_eq!(canvas.frame().get_cell(0, 0).unwrap().bg(), theme.switch.active);
  assert_eq!(canvas.frame().get_cell(3, 0).unwrap().bg(), theme.switch.pipe);
}
