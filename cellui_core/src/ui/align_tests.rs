use super::align::*;

use crate::prelude::*;
use crate::rect;
use crate::size;

#[test]
fn parse1() {
  assert_eq!(
    HorizontalAlignment::parse("center").unwrap(),
    HorizontalAlignment::Center
  );
  assert_eq!(
    HorizontalAlignment::parse("Right").unwrap(),
    HorizontalAlignment::Right
  );
  assert_eq!(
    VerticalAlignment::parse(" bottom ").unwrap(),
    VerticalAlignment::Bottom
  );
  assert!(matches!(
    VerticalAlignment::parse("middle"),
    Err(UiErr::UnknownAlignment(_))
  ));

  let a = Alignment::parse("center top").unwrap();
  assert_eq!(a.horizontal, HorizontalAlignment::Center);
  assert_eq!(a.vertical, VerticalAlignment::Top);
  assert!(Alignment::parse("center").is_err());
  assert!(Alignment::parse("left top bottom").is_err());
}

#[test]
fn align1() {
  let container = rect!(10, 5, 20, 10);
  let object = size!(4_isize, 2_isize);
  let cases = [
    ("left top", (10, 5)),
    ("center top", (18, 5)),
    ("right top", (26, 5)),
    ("left center", (10, 9)),
    ("center center", (18, 9)),
    ("right bottom", (26, 13)),
  ];
  for (text, expect) in cases.iter() {
    let a = Alignment::parse(text).unwrap();
    assert_eq!(a.align(object, &container), *expect, "{}", text);
  }
}

#[test]
fn margin1() {
  let left_top = Alignment::parse("left top").unwrap();
  assert_eq!(left_top.margin(2, 1), (2, 1));
  let right_bottom = Alignment::parse("right bottom").unwrap();
  assert_eq!(right_bottom.margin(2, 1), (-2, -1));
  assert_eq!(Alignment::center().margin(2, 1), (0, 0));
}
