use super::slider::*;

use crate::rect;
use crate::tests::evloop::{make_events, touch};
use crate::tests::log::init as test_log_init;
use crate::tests::tree::{dispatch_all, make_tree};
use crate::evloop::{Event, MockEvent};
use crate::ui::theme::Theme;
use crate::ui::widget::Notice;

fn make_options(min: f64, max: f64, rounding: bool) -> SliderOptions {
  SliderOptions::builder()
    .minimum_value(min)
    .maximum_value(max)
    .rounding(rounding)
    .build()
    .unwrap()
}

#[test]
fn options1() {
  let options = SliderOptions::builder().build().unwrap();
  assert_eq!(options, SliderOptions::default());
  assert_eq!(options.maximum_value(), 100.0);
  assert!(!options.rounding());
}

#[test]
fn value_at1() {
  let theme = Theme::default();
  let slider = Slider::new(rect!(0, 0, 11, 1), &make_options(0.0, 10.0, false), &theme);
  assert_eq!(slider.value_at(0), 0.0);
  assert_eq!(slider.value_at(5), 5.0);
  assert_eq!(slider.value_at(10), 10.0);
  assert_eq!(slider.value_at(30), 10.0);
  assert_eq!(slider.value_at(-3), 0.0);

  let slider = Slider::new(rect!(0, 0, 11, 1), &make_options(0.0, 1.0, true), &theme);
  assert_eq!(slider.value_at(4), 0.0);
  assert_eq!(slider.value_at(6), 1.0);
}

#[test]
fn drag1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 3);
  let slider = Slider::new(rect!(2, 1, 11, 1), &make_options(0.0, 10.0, false), &theme);
  let id = tree.insert(tree.root_id(), slider).unwrap();
  tree.draw(&mut canvas).unwrap();

  let mut events = make_events(vec![
    touch(7, 1),
    MockEvent::Event(Event::drag(9, 1)),
    MockEvent::Event(Event::drag(9, 1)),
  ]);
  let notices = dispatch_all(&mut tree, &mut events, &mut canvas);
  assert_eq!(
    notices,
    vec![Notice::ValueChanged(id, 5.0), Notice::ValueChanged(id, 7.0)]
  );
  let slider = tree.node(id).unwrap().slider().unwrap();
  assert_eq!(slider.thumb_x(), 9);
  assert_eq!(canvas.frame().get_cell(9, 1).unwrap().symbol(), "●");
}

#[test]
fn clamp1() {
  test_log_init();

  let theme = Theme::default();
  let (mut tree, mut canvas) = make_tree(20, 3);
  let mut slider = Slider::new(rect!(0, 0, 11, 1), &make_options(0.0, 10.0, false), &theme);
  slider.set_value(20.0);
  let id = tree.insert(tree.root_id(), slider).unwrap();
  tree.draw(&mut canvas).unwrap();
  assert_eq!(tree.node(id).unwrap().slider().unwrap().value(), 10.0);
}
