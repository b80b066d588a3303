//! Server Log
//!
//! Bounded, timestamped list of messages shown in the "Server Log" panel.

use std::collections::VecDeque;
use std::fmt;

use chrono::Local;

/// Entries kept before the oldest ones are dropped
pub const DEFAULT_MAX_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct ServerLog {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl ServerLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Self::timestamp(),
            level,
            message: message.into(),
        };

        match level {
            LogLevel::Info => tracing::info!("{}", entry.message),
            LogLevel::Warn => tracing::warn!("{}", entry.message),
            LogLevel::Error => tracing::error!("{}", entry.message),
        }

        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.push(LogLevel::Info, msg);
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.push(LogLevel::Warn, msg);
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.push(LogLevel::Error, msg);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ServerLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
