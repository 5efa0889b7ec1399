use std::sync::Mutex;
use serde::Serialize;

use crate::logging::level::Level;

/// Destination for log lines that passed the gate.
///
/// Returns the number of bytes written.
pub trait LogSink {
    fn write(&self, level: Level, tag: &str, message: &str) -> usize;
}

/// Forwards log lines as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: Level, tag: &str, message: &str) -> usize {
        match level {
            Level::Verbose => tracing::trace!(target: "taglog", tag = %tag, "{}", message),
            Level::Debug => tracing::debug!(target: "taglog", tag = %tag, "{}", message),
            Level::Info => tracing::info!(target: "taglog", tag = %tag, "{}", message),
            Level::Warn => tracing::warn!(target: "taglog", tag = %tag, "{}", message),
            Level::Error => tracing::error!(target: "taglog", tag = %tag, "{}", message),
        }
        message.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: Level,
    pub tag: String,
    pub message: String,
}

/// Keeps every log line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: Level, tag: &str, message: &str) -> usize {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                tag: tag.to_string(),
                message: message.to_string(),
            });
            message.len()
        } else {
            0
        }
    }
}
