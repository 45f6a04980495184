//! Append-only combat transcript.
//!
//! Log lines are human-readable and timestamped for display; they are not a
//! structured event stream.

use chrono::Local;

/// One timestamped log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Wall-clock time of day, formatted `HH:MM:SS`.
    pub timestamp: String,
    pub message: String,
}

/// Append-only ordered sequence of combat messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    entries: Vec<LogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with the current local time.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole transcript as `[HH:MM:SS] message` lines.
    pub fn transcript(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("[{}] {}", e.timestamp, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
