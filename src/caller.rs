//! Call-site capture for debug lines.

use std::env;
use std::panic::Location;
use std::sync::OnceLock;

/// Environment variable holding a source-root prefix. When set, debug lines
/// render caller paths relative to `<root>/src/` instead of as captured.
pub const SOURCE_ROOT_ENV: &str = "KVLOG_SOURCE_ROOT";

/// File and line of a logging call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Capture the location of the caller. `#[track_caller]` propagates
    /// through, so a `#[track_caller]` logging method calling this resolves
    /// to the user's call site, not the logger internals.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// A site that could not be resolved, rendered as `unknown#0`.
    pub fn unknown() -> Self {
        Self {
            file: "unknown",
            line: 0,
        }
    }

    pub fn resolved(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Render as `<file>#<line>`, shortening the file path to be relative to
    /// `<source_root>/src/` when that prefix matches. A non-matching or absent
    /// root leaves the path unmodified.
    pub fn render(&self, source_root: Option<&str>) -> String {
        let file = match source_root {
            Some(root) => {
                let prefix = format!("{}/src/", root.trim_end_matches('/'));
                self.file.strip_prefix(prefix.as_str()).unwrap_or(self.file)
            }
            None => self.file,
        };
        format!("{}#{}", file, self.line)
    }
}

/// Source root from the process environment, read once per process.
pub fn env_source_root() -> Option<&'static str> {
    static ROOT: OnceLock<Option<String>> = OnceLock::new();
    ROOT.get_or_init(|| env::var(SOURCE_ROOT_ENV).ok()).as_deref()
}
