//! User interface.

pub mod align;
pub mod canvas;
pub mod modal;
pub mod theme;
pub mod tree;
pub mod util;
pub mod widget;

#[cfg(test)]
mod align_tests;
#[cfg(test)]
mod tree_tests;
