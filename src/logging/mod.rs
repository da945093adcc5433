//! Logging infrastructure for console and file output.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
#[cfg(test)]
pub use types::MockLog;
pub use types::Log;

/// A [`Log`] double that records every message with its level.
///
/// Used where tests assert on the sequence of log lines rather than on
/// individual calls (for which `MockLog` is the better fit).
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: std::sync::Mutex<Vec<(&'static str, String)>>,
}

#[cfg(test)]
impl RecordingLog {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at `level` (`"info"`, `"debug"`, `"warn"`, `"error"`).
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries.lock().map_or_else(
            |_| vec![],
            |g| {
                g.iter()
                    .filter(|(l, _)| *l == level)
                    .map(|(_, m)| m.clone())
                    .collect()
            },
        )
    }

    fn push(&self, level: &'static str, msg: &str) {
        if let Ok(mut g) = self.entries.lock() {
            g.push((level, msg.to_string()));
        }
    }
}

#[cfg(test)]
impl Log for RecordingLog {
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
