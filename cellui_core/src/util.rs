//! Utils.

pub mod flag;
