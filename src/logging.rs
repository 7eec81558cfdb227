//! Console Logger
//!
//! `log` backend for the browser: forwards to `web_sys::console` and keeps the
//! most recent lines in a bounded buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut buffer) = self.recent.lock() {
            while buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{:<5} {}", record.level(), record.args());
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the global logger. Filtering is left to `log::max_level`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(LevelFilter::Trace, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Lines buffered by the installed logger, oldest first. Empty before `init`.
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_latest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Warn, "three");

        assert_eq!(logger.recent(), vec!["INFO  two", "WARN  three"]);
    }

    #[test]
    fn test_level_filter_applies() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");

        assert_eq!(logger.recent(), vec!["ERROR shown"]);
    }

    #[test]
    fn test_installed_logger_buffers_macro_output() {
        let _ = init(LevelFilter::Trace);
        log::warn!("[test] buffered through the facade");

        assert!(recent()
            .iter()
            .any(|line| line == "WARN  [test] buffered through the facade"));
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = init(LevelFilter::Trace);
        assert!(init(LevelFilter::Info).is_err());
    }

    #[test]
    fn test_zero_capacity_buffers_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        emit(&logger, Level::Info, "dropped");
        assert!(logger.recent().is_empty());
    }
}
