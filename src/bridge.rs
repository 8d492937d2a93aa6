//! Adapter exposing a [`Logger`] behind the `log` crate facade.
//!
//! Code written against `log::info!` and friends keeps working while the
//! lines flow through the configured sink in the usual format. `Warn` folds
//! into INFO and `Trace` into DEBUG; the facade itself only has the three
//! levels.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::caller::CallSite;
use crate::level::Level;
use crate::logger::Logger;

struct Bridge {
    logger: Logger,
}

fn severity(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn | log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for Bridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        severity(metadata.level()) != Level::Debug || self.logger.debug_enabled()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match severity(record.level()) {
            Level::Debug => {
                // Records carry the macro call site; missing metadata
                // degrades to the unknown placeholder.
                let site = match record.file_static() {
                    Some(file) => CallSite::resolved(file, record.line().unwrap_or(0)),
                    None => CallSite::unknown(),
                };
                self.logger.emit(Level::Debug, Some(site), *record.args());
            }
            level => self.logger.emit(level, None, *record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the process-wide `log` backend. Fails if another
/// backend is already installed; callers that tolerate double initialization
/// can ignore the error.
pub fn try_install(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = if logger.debug_enabled() {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    log::set_boxed_logger(Box::new(Bridge { logger }))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log as _;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn bridged(debug: bool) -> (Bridge, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::builder().debug(debug).target(buf.clone()).build();
        (Bridge { logger }, buf)
    }

    #[test]
    fn warn_records_fold_into_info() {
        let (bridge, buf) = bridged(false);
        bridge.log(
            &Record::builder()
                .args(format_args!("slow response"))
                .level(log::Level::Warn)
                .build(),
        );
        let line = buf.contents();
        assert!(line.contains("|INFO| slow response"), "got {line}");
    }

    #[test]
    fn debug_records_are_gated() {
        let (bridge, buf) = bridged(false);
        bridge.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(log::Level::Debug)
                .build(),
        );
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn debug_records_carry_record_call_site() {
        let (bridge, buf) = bridged(true);
        bridge.log(
            &Record::builder()
                .args(format_args!("detail"))
                .level(log::Level::Debug)
                .file_static(Some("src/engine/core.rs"))
                .line(Some(17))
                .build(),
        );
        let line = buf.contents();
        assert!(
            line.contains("|DEBUG| src/engine/core.rs#17 detail"),
            "got {line}"
        );
    }

    #[test]
    fn missing_record_location_renders_placeholder() {
        let (bridge, buf) = bridged(true);
        bridge.log(
            &Record::builder()
                .args(format_args!("lost"))
                .level(log::Level::Trace)
                .build(),
        );
        let line = buf.contents();
        assert!(line.contains("|DEBUG| unknown#0 lost"), "got {line}");
    }

    #[test]
    fn error_records_pass_through() {
        let (bridge, buf) = bridged(false);
        bridge.log(
            &Record::builder()
                .args(format_args!("exploded"))
                .level(log::Level::Error)
                .build(),
        );
        let line = buf.contents();
        assert!(line.contains("|ERROR| exploded"), "got {line}");
    }
}
