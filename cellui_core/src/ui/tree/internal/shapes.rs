//! Internal tree node shape utils.

use crate::prelude::*;

/// Convert relative shape to absolute shape, based on its parent's actual shape.
///
/// NOTE: The result is not clipped by the parent, clipping happens when drawing and
/// hit-testing.
pub fn make_actual_shape(shape: &IRect, parent_actual_shape: &IRect) -> IRect {
  shape.offset(parent_actual_shape.x(), parent_actual_shape.y())
}

/// Bound child position inside its parent size. When it's out of its parent, simply put it
/// at the boundary. When it's larger than its parent, the top-left corner wins.
pub fn bound_position(shape: &IRect, parent_size: &USize) -> IRect {
  let max_x = parent_size.width() as isize - shape.width();
  let max_y = parent_size.height() as isize - shape.height();
  let x = num_traits::clamp(shape.x(), 0, max_x.max(0));
  let y = num_traits::clamp(shape.y(), 0, max_y.max(0));
  shape.with_position(x, y)
}
