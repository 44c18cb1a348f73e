//! `log` backend that forwards records to the host's `log` import.
//!
//! Log lines are not consensus-critical: the host may drop them, and the
//! guest never branches on whether a log call succeeded.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Host log level code for a `log` level (`error = 1` … `trace = 5`).
pub fn level_code(level: Level) -> u32 {
    match level {
        Level::Error => 1,
        Level::Warn => 2,
        Level::Info => 3,
        Level::Debug => 4,
        Level::Trace => 5,
    }
}

/// Forwards every enabled record to the host.
pub struct HostLogger;

static LOGGER: HostLogger = HostLogger;

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    #[cfg(target_arch = "wasm32")]
    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format!("{}: {}", record.target(), record.args());
        // Result intentionally unchecked; see module docs.
        let _ = unsafe {
            crate::imports::log(
                level_code(record.level()),
                message.as_ptr() as u32,
                message.len() as u32,
            )
        };
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(&self, _record: &Record<'_>) {}

    fn flush(&self) {}
}

/// Install [`HostLogger`] as the global logger.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn init_logging(max_level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(max_level);
}
