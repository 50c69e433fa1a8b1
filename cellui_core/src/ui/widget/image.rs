//! Image.

use crate::inode_impl;
use crate::prelude::*;
use crate::ui::canvas::{Compositor, ImageSource, Picture};
use crate::ui::tree::*;
use crate::ui::widget::Widgetable;

#[derive(Debug, Clone)]
/// Draws a picture, its size is the picture size.
pub struct Image {
  base: InodeBase,
  picture: Picture,
}

inode_impl!(Image);

impl Image {
  pub fn new(x: isize, y: isize, picture: Picture) -> Self {
    let size = picture.size();
    Image {
      base: InodeBase::new(xywh(x, y, size.width() as isize, size.height() as isize)),
      picture,
    }
  }

  /// Load the picture by name from a source.
  ///
  /// # Errors
  ///
  /// If the source doesn't have the picture.
  pub fn from_source(
    x: isize,
    y: isize,
    source: &dyn ImageSource,
    name: &str,
  ) -> UiResult<Self> {
    match source.picture(name) {
      Some(picture) => Ok(Image::new(x, y, picture)),
      None => {
        error!("picture {:?} not found", name);
        Err(UiErr::ResourceNotFound(name.to_string()))
      }
    }
  }

  pub fn picture(&self) -> &Picture {
    &self.picture
  }

  /// Replace the picture, the shape is resized to the picture size.
  pub fn set_picture(&mut self, picture: Picture) {
    let size = picture.size();
    let shape = self
      .shape()
      .with_size(size.width() as isize, size.height() as isize);
    self.set_shape(shape);
    self.picture = picture;
  }
}

impl Widgetable for Image {
  fn draw(&mut self, canvas: &mut dyn Compositor) {
    let actual = *self.actual_shape();
    canvas.draw_picture(actual.x(), actual.y(), &self.picture);
  }
}
