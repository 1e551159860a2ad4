//! Ring Logger
//!
//! `log` backend for browser widgets. Every record is forwarded to the
//! console and the most recent lines are kept in a bounded ring buffer so
//! they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// Fixed-size buffer of formatted log lines (oldest evicted first)
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Console logger with an in-memory tail
pub struct RingLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(Utc::now(), record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);

        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    fn flush(&self) {}
}

/// Install the logger as the global `log` backend.
///
/// Only the first call takes effect; later calls return the `log` crate's error.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines recorded since `init`, oldest first. Empty when the logger is not installed.
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RingLogger::recent).unwrap_or_default()
}

/// `<timestamp> <LEVEL> <target>: <message>`
pub fn format_line(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        assert!(buffer.is_empty());
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let line = format_line(at, Level::Warn, "todo_widget::storage", "parse error");
        assert_eq!(line, "2024-05-01T12:30:00.000Z WARN  todo_widget::storage: parse error");
    }

    #[test]
    fn test_recent_reads_installed_logger() {
        init(LevelFilter::Info, 4).unwrap();
        log::debug!("below level");
        for i in 0..6 {
            log::info!("record {}", i);
        }

        let lines = recent();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("record 2"));
        assert!(lines[3].ends_with("record 5"));
        assert!(init(LevelFilter::Info, 4).is_err());
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = RingLogger::new(LevelFilter::Warn, 8);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("t")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("t")
                .args(format_args!("shown"))
                .build(),
        );

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR t: shown"));
    }
}
