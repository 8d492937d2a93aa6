//! The `Logger` and its builder.

use std::fmt;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::caller::{env_source_root, CallSite};
use crate::level::Level;

/// Shared, lock-guarded output sink. The mutex supplies the concurrent-write
/// guarantee the logger requires of its destination.
type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Configures a [`Logger`]. Options apply in call order; a later call to the
/// same option overrides the earlier one.
pub struct Builder {
    debug: bool,
    sink: Option<Box<dyn Write + Send>>,
    source_root: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            debug: false,
            sink: None,
            source_root: None,
        }
    }

    /// Enable or disable debug-level emission. Off by default.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Replace the output sink. Defaults to standard output, which is
    /// buffered and internally locked.
    pub fn target<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the source-root prefix stripped from caller paths on debug lines.
    /// Defaults to the `KVLOG_SOURCE_ROOT` environment variable, read once
    /// per process.
    pub fn source_root(mut self, root: impl Into<String>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    pub fn build(self) -> Logger {
        let sink: Box<dyn Write + Send> = match self.sink {
            Some(sink) => sink,
            None => Box::new(io::stdout()),
        };
        let source_root = self
            .source_root
            .or_else(|| env_source_root().map(str::to_owned))
            .map(Arc::from);
        Logger {
            pairs: IndexMap::new(),
            debug: self.debug,
            sink: Arc::new(Mutex::new(sink)),
            source_root,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// A three-level log with attachable key-value context.
///
/// Cloning is cheap: derived loggers share the sink and configuration and own
/// their context pairs. Logging calls never fail and never panic; a sink that
/// errors loses the line silently.
#[derive(Clone)]
pub struct Logger {
    pairs: IndexMap<String, String>,
    debug: bool,
    sink: Sink,
    source_root: Option<Arc<str>>,
}

impl Logger {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Attach key-value pairs, returning a new logger whose context is the
    /// union of the existing pairs and `pairs`. New values overwrite existing
    /// keys; everything else is retained. The receiver is left untouched, so
    /// sibling derivations never observe each other's keys.
    pub fn with<I, K, V>(&self, pairs: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut derived = self.clone();
        for (key, value) in pairs {
            derived.pairs.insert(key.into(), value.into());
        }
        derived
    }

    /// Emit at DEBUG with caller-location enrichment. A no-op when debug is
    /// disabled: nothing is formatted and nothing is written.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if !self.debug {
            return;
        }
        self.emit(Level::Debug, Some(CallSite::here()), args);
    }

    /// Emit at INFO. Never carries a caller segment.
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, None, args);
    }

    /// Emit at ERROR. Never carries a caller segment.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, None, args);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Assemble and write one line:
    /// `<RFC3339 UTC> |<LEVEL>| [<file>#<line> ]<k=v pairs><message>\n`.
    /// Pairs are space-joined and the message follows the last pair with no
    /// separator, for compatibility with existing line consumers.
    pub(crate) fn emit(&self, level: Level, caller: Option<CallSite>, args: fmt::Arguments<'_>) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut line = String::new();
        let _ = write!(line, "{timestamp} |{level}| ");
        if let Some(site) = caller {
            let _ = write!(line, "{} ", site.render(self.source_root.as_deref()));
        }
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{key}={value}");
        }
        let _ = write!(line, "{args}");
        line.push('\n');

        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(line.as_bytes());
            let _ = sink.flush();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Builder::new().build()
    }
}
