//! UI utils.

pub mod strings;

#[cfg(test)]
mod strings_tests;
