#![cfg(feature = "std")]

//! Stderr logger for the binaries.
//!
//! Lines look like `+0.012s DEBUG game: spawned 2 at (1, 3)`: time since
//! [`init_logging`], padded level, then the module path with the crate
//! prefix dropped. Stdout is left to board output and JSON snapshots.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable holding the level filter.
pub const LOG_ENV: &str = "TILESLIDE_LOG";

const CRATE: &str = "tileslide";

struct StderrLogger {
    started: OnceLock<Instant>,
}

impl StderrLogger {
    fn elapsed_secs(&self) -> f64 {
        self.started.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "+{:.3}s {:<5} {}: {}",
            self.elapsed_secs(),
            record.level(),
            short_target(record.target()),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

/// Module path relative to this crate; foreign targets are kept whole.
pub fn short_target(target: &str) -> &str {
    match target.strip_prefix(CRATE) {
        Some("") => CRATE,
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

/// Parses a level filter such as `debug` or `OFF`, ignoring surrounding
/// whitespace. Returns `None` for anything else.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Installs the stderr logger with the level from `TILESLIDE_LOG`, falling
/// back to `info` when unset or unparsable. Calling it again is a no-op.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(LevelFilter::Info);
    LOGGER.started.get_or_init(Instant::now);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
