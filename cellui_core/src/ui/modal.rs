//! Modal sub-loops.
//!
//! A modal widget takes over the event pump: it runs its own blocking loop on the caller's
//! stack, reading from the same event source as the outer loop, until it produces a result.
//! The screen region it covers is copied before it draws, and restored by a
//! [`RegionGuard`](crate::ui::canvas::RegionGuard) when it returns.

pub mod dropdown;
pub mod error_dialog;
pub mod palette;

#[cfg(test)]
mod dropdown_tests;

pub use dropdown::*;
pub use error_dialog::*;
pub use palette::*;
