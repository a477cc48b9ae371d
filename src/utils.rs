//! Shared process-level helpers.
//!
//! The library itself only emits records through the `log` facade; binaries,
//! benches and bindings that want to see them call `init_logging` once.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::ComputeError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend printing `[LEVEL] message` lines.
///
/// Output goes to stderr, or is appended to `log_file` when one is given.
/// Only the first call installs a logger; later calls are no-ops, as is a call
/// made after some other logger was already installed.
///
/// # Errors
/// `ComputeError::Io` if `log_file` cannot be opened for appending.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), ComputeError> {
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }

    // Open before `call_once` so a bad path is reported instead of swallowed.
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
