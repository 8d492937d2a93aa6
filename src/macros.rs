//! Printf-style entry points.
//!
//! Each macro expands to a plain method call wrapping `format_args!`, so
//! format verbs are checked at compile time and the expansion sits at the
//! user's call site, which is what `#[track_caller]` resolves for debug
//! lines.

/// Emit at DEBUG if the logger has debug enabled; otherwise a no-op.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(::std::format_args!($($arg)*))
    };
}

/// Emit at INFO.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(::std::format_args!($($arg)*))
    };
}

/// Emit at ERROR.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(::std::format_args!($($arg)*))
    };
}
