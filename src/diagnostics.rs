use chrono::{DateTime, Local};
use log::debug;
use std::fmt;

/// One line of the user-visible diagnostics panel
#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Timestamped messages shown alongside search results.
///
/// Every entry is also forwarded to the `log` facade at debug level, so the
/// same trail shows up in `RUST_LOG=debug` output.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("{}", message);
        self.entries.push(DiagnosticEntry {
            at: Local::now(),
            message,
        });
    }

    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// The panel is hidden until something has been recorded
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
