//! The core library for the CELLUI widget toolkit.
//!
//! A retained-mode GUI toolkit for character-cell screens: a tree of drawable and
//! clickable widgets with z-order, clipping, a recursive hit-testing event dispatcher, a
//! grid layout solver, and modal sub-loops (menus, palette, text editor, error dialog).

pub mod constant;
pub mod coord;
pub mod evloop;
pub mod log;
pub mod prelude;
pub mod results;
pub mod ui;
pub mod util;
