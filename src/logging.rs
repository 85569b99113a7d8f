use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Writes every record as a single line to stderr, so stdout only carries the maze.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }
}

pub fn format_message(level: log::Level, source: &str, message: &str) -> String {
    format!("[{level} {source}] {message}")
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_message(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
