//! Global constants.
//!
//! Timing constants can be tuned through environment variables, they're read once on first
//! use.

use once_cell::sync::Lazy;
use std::time::Duration;

/// Environment variable that controls the logging level.
pub const CELLUI_LOG: &str = "CELLUI_LOG";

fn millis_from_env(name: &str, default_value: u64) -> u64 {
  std::env::var(name)
    .map(|v| v.parse::<u64>().unwrap_or(default_value))
    .unwrap_or(default_value)
}

/// How long a pressed button (or menu item) stays latched before it's released, by default
/// is 200 milliseconds.
///
/// NOTE: This constant can be configured through `CELLUI_PRESS_DURATION_MILLIS` environment
/// variable.
pub static PRESS_DURATION: Lazy<Duration> = Lazy::new(|| {
  Duration::from_millis(millis_from_env("CELLUI_PRESS_DURATION_MILLIS", 200))
});

/// The event waiting timeout of the blocking text editor, the cursor blinks every time it
/// elapses. By default is 400 milliseconds.
///
/// NOTE: This constant can be configured through `CELLUI_CURSOR_BLINK_MILLIS` environment
/// variable.
pub static CURSOR_BLINK_INTERVAL: Lazy<Duration> = Lazy::new(|| {
  Duration::from_millis(millis_from_env("CELLUI_CURSOR_BLINK_MILLIS", 400))
});

/// Cursor symbol of the text editor.
pub const CURSOR_SYMBOL: char = '┃';

/// Symbol used to draw an empty cell.
pub const SPACE: char = ' ';
