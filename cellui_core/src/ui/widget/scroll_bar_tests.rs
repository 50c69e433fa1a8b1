use super::scroll_bar::*;

use crate::evloop::{Event, MockEvent};
use crate::rect;
use crate::tests::evloop::{make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::ui::theme::Theme;
use crate::ui::widget::Notice;

fn make_options(min: f64, max: f64, value: f64) -> ScrollBarOptions {
  ScrollBarOptions::builder()
    .minimum_value(min)
    .maximum_value(max)
    .value(value)
    .build()
    .unwrap()
}

#[test]
fn value_at1() {
  let theme = Theme::default();
  let bar = ScrollBar::new(rect!(0, 0, 10, 1), &make_options(1.0, 10.0, 1.0), &theme);
  assert!(!bar.vertical());
  assert_eq!(bar.value_at(0), 1.0);
  assert_eq!(bar.value_at(9), 10.0);
  assert_eq!(bar.value_at(3), 4.0);
  assert_eq!(bar.value_at(20), 10.0);
}

#[test]
fn thumb1() {
  let theme = Theme::default();
  let options = ScrollBarOptions::builder()
    .shown_value_count(25.0)
    .build()
    .unwrap();
  let mut bar = ScrollBar::new(rect!(0, 0, 1, 8), &options, &theme);
  assert!(bar.vertical());
  assert_eq!(bar.thumb_len(), 2);
  assert_eq!(bar.thumb_position(), 0);

  bar.set_value(100.0);
  assert_eq!(bar.thumb_position(), 6);
  bar.set_value(500.0);
  assert_eq!(bar.value(), 100.0);
}

#[test]
fn touch1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(12, 3);
  let bar = ScrollBar::new(rect!(1, 1, 10, 1), &make_options(1.0, 10.0, 1.0), &theme);
  let id = tree.insert(tree.root_id(), bar).unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![
    touch(10, 1),
    MockEvent::Event(Event::scroll(5, 1, 1)),
    MockEvent::Event(Event::scroll(5, 1, -1)),
    MockEvent::Event(Event::scroll(5, 1, -1)),
    touch(1, 1),
  ]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(
    notices,
    vec![
      Notice::ValueChanged(id, 10.0),
      Notice::ValueChanged(id, 9.0),
      Notice::ValueChanged(id, 10.0),
      Notice::ValueChanged(id, 1.0),
    ]
  );
}
