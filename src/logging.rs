use std::env;

use log::{LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Level requested through `NAVAL_GRID_LOG`, `info` if unset or invalid.
pub fn configured_level() -> LevelFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install a stdout logger at the level from `NAVAL_GRID_LOG`.
///
/// Returns `false` if another logger was already installed, in which case
/// the existing logger and level are left alone.
pub fn init_logging() -> bool {
    let level = configured_level();
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
        .is_ok()
}
