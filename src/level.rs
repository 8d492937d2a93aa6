//! Log severity levels.

use std::fmt;

/// Severity of an emitted log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Detailed output for local development; gated behind the debug flag.
    Debug,
    /// Normal operational statements: startup lines, state changes.
    Info,
    /// Unexpected errors, fit for shipping to an aggregation service.
    Error,
}

impl Level {
    /// The tag rendered between pipes in an emitted line.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
