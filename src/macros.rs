//! Logging macros for ergonomic templated writes.
//!
//! Each macro takes a logger, a message template and any number of capture
//! arguments. Arguments are converted into [`CaptureValue`]s only when the
//! level is enabled, and always bind as a list: a single argument binds to the
//! first hole, never as a packed argument list. Every macro evaluates to the
//! `Result<()>` of the write.
//!
//! # Examples
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use rust_structured_logger::info;
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {Port}", port).unwrap();
//!
//! let (user_id, action) = (42, "login");
//! info!(logger, "User {UserId} performed {Action}", user_id, action).unwrap();
//! ```
//!
//! [`CaptureValue`]: crate::CaptureValue

/// Write an event at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
/// use rust_structured_logger::log;
/// log!(logger, LogLevel::Information, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {Code}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_enabled(level) {
            logger.write(
                level,
                $template,
                $crate::Captures::Variadic(::std::vec![$($crate::CaptureValue::from($arg)),*]),
            )
        } else {
            logger.write(level, $template, ())
        }
    }};
}

/// Write a verbose-level event.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Verbose).sink(MemorySink::new()).build().unwrap();
/// use rust_structured_logger::verbose;
/// verbose!(logger, "Entering {Function}", "calculate").unwrap();
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

/// Write a debug-level event.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Write an information-level event.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Information, $($arg)+)
    };
}

/// Write a warning-level event.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
/// use rust_structured_logger::warn;
/// warn!(logger, "Retry attempt {Attempt} of {Max}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Write an error-level event.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Write a fatal-level event.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::sync::Arc;

    fn logger() -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .min_level(LogLevel::Debug)
            .sink(Arc::clone(&sink))
            .build()
            .unwrap();
        (logger, sink)
    }

    #[test]
    fn test_macros_bind_arguments() {
        let (logger, sink) = logger();
        crate::info!(logger, "{A} and {B}", 1, "two").unwrap();
        crate::error!(logger, "no args").unwrap();

        let events = sink.events();
        assert_eq!(events[0].render_message(), "1 and \"two\"");
        assert_eq!(events[1].level(), LogLevel::Error);
    }

    #[test]
    fn test_single_sequence_argument_is_not_unpacked() {
        let (logger, sink) = logger();
        crate::warn!(logger, "Items {Items}", vec![1, 2, 3]).unwrap();

        let events = sink.events();
        assert!(matches!(events[0].property("Items"), Some(PropertyValue::Sequence(_))));
    }

    #[test]
    fn test_disabled_level_skips_conversion() {
        let (logger, sink) = logger();
        crate::verbose!(logger, "hidden {X}", 1).unwrap();
        assert!(sink.is_empty());
        assert_eq!(logger.metrics().suppressed_count(), 1);
    }
}
