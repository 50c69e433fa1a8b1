use super::image::*;

use crate::prelude::*;
use crate::tests::canvas::row_symbols;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::make_tree;
use crate::ui::canvas::Picture;
use crate::ui::tree::*;

use crossterm::style::Color;

fn pictures() -> HashMap<String, Picture> {
  let mut map = HashMap::new();
  map.insert(
    "logo".to_string(),
    Picture::from_rows(&["ab", " c"], Color::White, Color::Black),
  );
  map
}

#[test]
fn from_source1() {
  test_log_init();

  let source = pictures();
  let image = Image::from_source(1, 0, &source, "logo").unwrap();
  assert_eq!(*image.shape(), xywh(1, 0, 2, 2));

  let missing = Image::from_source(0, 0, &source, "icon");
  assert!(matches!(missing, Err(UiErr::ResourceNotFound(name)) if name == "icon"));
}

#[test]
fn draw1() {
  test_log_init();

  let (mut tree, mut canvas) = make_tree(4, 2);
  let image = Image::from_source(1, 0, &pictures(), "logo").unwrap();
  tree.insert(tree.root_id(), image).unwrap();
  tree.draw(&mut canvas).unwrap();

  assert_eq!(row_symbols(&canvas, 0, 0, 4), " ab ");
  assert_eq!(row_symbols(&canvas, 1, 0, 4), "  c ");
}

#[test]
fn set_picture1() {
  let mut image = Image::new(0, 0, Picture::new(1, 1, None));
  image.set_picture(Picture::new(3, 2, None));
  assert_eq!(*image.shape(), xywh(0, 0, 3, 2));
}
