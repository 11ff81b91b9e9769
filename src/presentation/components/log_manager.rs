use chrono::{DateTime, Local};
use std::collections::{HashSet, VecDeque};

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn from_prefix(line: &str) -> (Self, &str) {
        let levels = [
            ("[TRACE] ", LogLevel::Debug),
            ("[DEBUG] ", LogLevel::Debug),
            ("[INFO] ", LogLevel::Info),
            ("[WARN] ", LogLevel::Warn),
            ("[ERROR] ", LogLevel::Error),
        ];
        for (prefix, level) in levels {
            if let Some(rest) = line.strip_prefix(prefix) {
                return (level, rest);
            }
        }
        (LogLevel::Info, line)
    }
}

pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
    visible_levels: HashSet<LogLevel>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
            visible_levels: [LogLevel::Info, LogLevel::Warn, LogLevel::Error]
                .into_iter()
                .collect(),
        }
    }

    /// Stores a captured line, reading its level from a `[LEVEL] ` prefix.
    pub fn push(&mut self, line: String) {
        let (level, message) = LogLevel::from_prefix(&line);
        let entry = LogEntry {
            level,
            message: message.to_string(),
            timestamp: Local::now(),
        };

        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn is_level_visible(&self, level: LogLevel) -> bool {
        self.visible_levels.contains(&level)
    }

    pub fn set_level_visible(&mut self, level: LogLevel, visible: bool) {
        if visible {
            self.visible_levels.insert(level);
        } else {
            self.visible_levels.remove(&level);
        }
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn filtered_logs_reversed(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .rev()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
