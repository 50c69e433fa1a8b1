//! Prelude.

// Re-export `log`.
pub use log::{debug, error, info, trace, warn};

// Re-export `coord`.
pub use crate::coord::*;
pub use crate::results::*;

// Re-export macros.
pub use crate::flags_impl;
pub use paste::paste;

// Re-export `ahash`;
pub use ahash::AHashMap as HashMap;
pub use ahash::AHashSet as HashSet;

// Re-export `geo`;
pub use geo::{self, Coord, Point, Rect};
