//! Logging.
//!
//! The terminal screen is owned by the widgets, so log records are written to a file in
//! the current directory.

use crate::constant::CELLUI_LOG;
use jiff::Zoned;

/// Timestamp of every log record.
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Name of the log file, one per process start.
pub const FILE_NAME_FORMAT: &str = "cellui_%Y%m%d_%H%M%S.log";

/// Install the global logger.
///
/// Level filters are read from the `CELLUI_LOG` environment variable, with the same
/// syntax as `RUST_LOG`. Nothing is logged when it is unset.
pub fn init() -> Result<(), fern::InitError> {
  let filter = env_filter::Builder::from_env(CELLUI_LOG).build();
  let file = fern::log_file(Zoned::now().strftime(FILE_NAME_FORMAT).to_string())?;

  fern::Dispatch::new()
    .filter(move |metadata| filter.enabled(metadata))
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {:<5} {}: {}",
        Zoned::now().strftime(RECORD_TIME_FORMAT),
        record.level(),
        record.target(),
        message
      ))
    })
    .chain(file)
    .apply()?;
  Ok(())
}
