//! Cartesian coordinate system.
//!
//! The screen coordinate system is not the 2-dimensional coordinate system in mathematics.
//! The first row is at the top, the first column is at the left, thus the Y-axis is upside
//! down:
//!
//! ```text
//!
//!  (left,top)
//!   (0,0)------------------(width,0)--------X
//!     |                         |
//!     |  Screen                 |
//!     |                         |
//!     |                         |
//!   (0,height)-------------(width,height)
//!     |                    (right,bottom)
//!     Y
//! ```
//!
//! All positions are 0-based. A rectangle stores its top-left corner inclusively and its
//! bottom-right corner exclusively, i.e. a rectangle at `(x, y)` with size `(w, h)` covers
//! columns `x..=x+w-1` and rows `y..=y+h-1`.

pub use geo::Coord;
pub use geo::Point;
pub use geo::Rect;

// Size {

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Generic rectangle size.
pub struct Size<T> {
  width: T,
  height: T,
}

impl<T> Size<T>
where
  T: Copy,
{
  /// Make size from width(columns) and height(rows).
  pub fn new(width: T, height: T) -> Self {
    Size { width, height }
  }

  /// Get width(columns).
  pub fn width(&self) -> T {
    self.width
  }

  /// Get height(rows).
  pub fn height(&self) -> T {
    self.height
  }
}

/// Size that uses [`isize`] as internal type.
pub type ISize = Size<isize>;

/// Size that uses [`usize`] as internal type.
pub type USize = Size<usize>;

// Size }

/// Position that uses [`isize`] as internal type.
pub type IPos = Point<isize>;

/// Rectangle that uses [`isize`] as internal type.
pub type IRect = Rect<isize>;

/// Make a rectangle from its top-left position and size.
pub fn xywh(x: isize, y: isize, width: isize, height: isize) -> IRect {
  let width = width.max(0);
  let height = height.max(0);
  Rect::new(
    Coord { x, y },
    Coord {
      x: x + width,
      y: y + height,
    },
  )
}

pub trait GeoRectExt {
  /// Left column, inclusive.
  fn x(&self) -> isize;

  /// Top row, inclusive.
  fn y(&self) -> isize;

  /// Right column, exclusive.
  fn right(&self) -> isize;

  /// Bottom row, exclusive.
  fn bottom(&self) -> isize;

  fn top_left(&self) -> IPos;

  fn size(&self) -> ISize;

  /// Whether the rectangle covers no cell at all.
  fn is_empty(&self) -> bool;

  /// Whether cell `(x, y)` is inside the rectangle. A zero-sized rectangle contains nothing.
  fn contains_xy(&self, x: isize, y: isize) -> bool;

  /// The overlapped part of two rectangles, `None` if they don't overlap.
  fn intersect(&self, other: &IRect) -> Option<IRect>;

  /// Same size, moved by `(dx, dy)`.
  fn offset(&self, dx: isize, dy: isize) -> IRect;

  /// Same size, moved to `(x, y)`.
  fn with_position(&self, x: isize, y: isize) -> IRect;

  /// Same position, resized to `(width, height)`.
  fn with_size(&self, width: isize, height: isize) -> IRect;
}

impl GeoRectExt for IRect {
  fn x(&self) -> isize {
    self.min().x
  }

  fn y(&self) -> isize {
    self.min().y
  }

  fn right(&self) -> isize {
    self.max().x
  }

  fn bottom(&self) -> isize {
    self.max().y
  }

  fn top_left(&self) -> IPos {
    Point::new(self.x(), self.y())
  }

  fn size(&self) -> ISize {
    Size::new(self.width(), self.height())
  }

  fn is_empty(&self) -> bool {
    self.width() <= 0 || self.height() <= 0
  }

  fn contains_xy(&self, x: isize, y: isize) -> bool {
    !self.is_empty()
      && x >= self.x()
      && x < self.right()
      && y >= self.y()
      && y < self.bottom()
  }

  fn intersect(&self, other: &IRect) -> Option<IRect> {
    let left = self.x().max(other.x());
    let top = self.y().max(other.y());
    let right = self.right().min(other.right());
    let bottom = self.bottom().min(other.bottom());
    if right > left && bottom > top {
      Some(xywh(left, top, right - left, bottom - top))
    } else {
      None
    }
  }

  fn offset(&self, dx: isize, dy: isize) -> IRect {
    xywh(self.x() + dx, self.y() + dy, self.width(), self.height())
  }

  fn with_position(&self, x: isize, y: isize) -> IRect {
    xywh(x, y, self.width(), self.height())
  }

  fn with_size(&self, width: isize, height: isize) -> IRect {
    xywh(self.x(), self.y(), width, height)
  }
}

/// Make a [`Size`] from width and height.
#[macro_export]
macro_rules! size {
  ($width:expr, $height:expr) => {
    $crate::coord::Size::new($width, $height)
  };
}

/// Make an [`IRect`] from `x`, `y`, `width` and `height`.
#[macro_export]
macro_rules! rect {
  ($x:expr, $y:expr, $width:expr, $height:expr) => {
    $crate::coord::xywh($x as isize, $y as isize, $width as isize, $height as isize)
  };
}
