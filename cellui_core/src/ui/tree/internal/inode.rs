//! Internal tree node.

use crate::flags_impl;
use crate::prelude::*;

use std::sync::atomic::{AtomicI32, Ordering};

/// Node ID.
pub type TreeNodeId = i32;

/// Next unique node ID.
///
/// NOTE: Start from 100001.
pub fn next_node_id() -> TreeNodeId {
  static VALUE: AtomicI32 = AtomicI32::new(100001);
  VALUE.fetch_add(1, Ordering::Relaxed)
}

pub trait Inodeable: Sized + Clone + std::fmt::Debug {
  fn id(&self) -> TreeNodeId;

  /// Local shape, relative to the parent's top-left corner.
  fn shape(&self) -> &IRect;

  fn set_shape(&mut self, shape: IRect);

  /// Absolute shape on the screen, recomputed before every draw.
  fn actual_shape(&self) -> &IRect;

  fn set_actual_shape(&mut self, actual_shape: IRect);

  /// Hidden nodes are neither drawn nor hit-tested.
  fn hidden(&self) -> bool;

  fn set_hidden(&mut self, value: bool);

  /// Disabled nodes are drawn, but never hit-tested.
  fn disabled(&self) -> bool;

  fn set_disabled(&mut self, value: bool);

  /// Whether a pointer at `(x, y)` hits this node.
  fn is_clicked(&self, x: isize, y: isize) -> bool {
    !self.hidden() && !self.disabled() && self.actual_shape().contains_xy(x, y)
  }
}

flags_impl!(
  NodeFlags,
  u8,
  HIDDEN = 1 => hidden / set_hidden,
  DISABLED = 1 << 1 => disabled / set_disabled,
);

#[derive(Debug, Clone, Copy)]
/// The shared attributes of all nodes.
pub struct InodeBase {
  id: TreeNodeId,
  shape: IRect,
  actual_shape: IRect,
  flags: NodeFlags,
}

impl InodeBase {
  pub fn new(shape: IRect) -> Self {
    InodeBase {
      id: next_node_id(),
      shape,
      actual_shape: shape,
      flags: NodeFlags::empty(),
    }
  }
}

impl Inodeable for InodeBase {
  fn id(&self) -> TreeNodeId {
    self.id
  }

  fn shape(&self) -> &IRect {
    &self.shape
  }

  fn set_shape(&mut self, shape: IRect) {
    self.shape = shape;
  }

  fn actual_shape(&self) -> &IRect {
    &self.actual_shape
  }

  fn set_actual_shape(&mut self, actual_shape: IRect) {
    self.actual_shape = actual_shape;
  }

  fn hidden(&self) -> bool {
    self.flags.hidden()
  }

  fn set_hidden(&mut self, value: bool) {
    self.flags.set_hidden(value);
  }

  fn disabled(&self) -> bool {
    self.flags.disabled()
  }

  fn set_disabled(&mut self, value: bool) {
    self.flags.set_disabled(value);
  }
}

/// Implement [`Inodeable`] for a struct that holds an [`InodeBase`] in its `base` field.
#[macro_export]
macro_rules! inode_impl {
  ($name:ty) => {
    impl $crate::ui::tree::Inodeable for $name {
      fn id(&self) -> $crate::ui::tree::TreeNodeId {
        $crate::ui::tree::Inodeable::id(&self.base)
      }

      fn shape(&self) -> &$crate::coord::IRect {
        $crate::ui::tree::Inodeable::shape(&self.base)
      }

      fn set_shape(&mut self, shape: $crate::coord::IRect) {
        $crate::ui::tree::Inodeable::set_shape(&mut self.base, shape);
      }

      fn actual_shape(&self) -> &$crate::coord::IRect {
        $crate::ui::tree::Inodeable::actual_shape(&self.base)
      }

      fn set_actual_shape(&mut self, actual_shape: $crate::coord::IRect) {
        $crate::ui::tree::Inodeable::set_actual_shape(&mut self.base, actual_shape);
      }

      fn hidden(&self) -> bool {
        $crate::ui::tree::Inodeable::hidden(&self.base)
      }

      fn set_hidden(&mut self, value: bool) {
        $crate::ui::tree::Inodeable::set_hidden(&mut self.base, value);
      }

      fn disabled(&self) -> bool {
        $crate::ui::tree::Inodeable::disabled(&self.base)
      }

      fn set_disabled(&mut self, value: bool) {
        $crate::ui::tree::Inodeable::set_disabled(&mut self.base, value);
      }
    }
  };
}

/// Implement [`Inodeable`] for an enum whose variants all implement it.
#[macro_export]
macro_rules! inode_enum_dispatcher {
  ($enum:ident, $($variant:tt),*) => {
    impl $crate::ui::tree::Inodeable for $enum {
      fn id(&self) -> $crate::ui::tree::TreeNodeId {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::id(e),
          )*
        }
      }

      fn shape(&self) -> &$crate::coord::IRect {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::shape(e),
          )*
        }
      }

      fn set_shape(&mut self, shape: $crate::coord::IRect) {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::set_shape(e, shape),
          )*
        }
      }

      fn actual_shape(&self) -> &$crate::coord::IRect {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::actual_shape(e),
          )*
        }
      }

      fn set_actual_shape(&mut self, actual_shape: $crate::coord::IRect) {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::set_actual_shape(e, actual_shape),
          )*
        }
      }

      fn hidden(&self) -> bool {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::hidden(e),
          )*
        }
      }

      fn set_hidden(&mut self, value: bool) {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::set_hidden(e, value),
          )*
        }
      }

      fn disabled(&self) -> bool {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::disabled(e),
          )*
        }
      }

      fn set_disabled(&mut self, value: bool) {
        match self {
          $(
            $enum::$variant(e) => $crate::ui::tree::Inodeable::set_disabled(e, value),
          )*
        }
      }
    }
  };
}
