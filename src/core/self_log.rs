//! Self-diagnostics for faults inside the logging pipeline
//!
//! Enricher failures, template binding mismatches and sink faults that the
//! pipeline recovers from are reported here rather than to the caller. By
//! default reports go to stderr; an application can redirect them with
//! [`enable`] or silence them with [`disable`].

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

type Output = Arc<dyn Fn(&str) + Send + Sync>;

enum Target {
    Stderr,
    Custom(Output),
    Disabled,
}

static TARGET: RwLock<Target> = parking_lot::const_rwlock(Target::Stderr);

/// Redirect self-diagnostics to `output`
///
/// # Example
///
/// ```
/// use rust_structured_logger::self_log;
///
/// self_log::enable(|line| println!("logger fault: {}", line));
/// self_log::reset();
/// ```
pub fn enable<F>(output: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    *TARGET.write() = Target::Custom(Arc::new(output));
}

/// Drop all self-diagnostics
pub fn disable() {
    *TARGET.write() = Target::Disabled;
}

/// Restore the default stderr output
pub fn reset() {
    *TARGET.write() = Target::Stderr;
}

/// Report an internal fault. Never fails and never panics into the caller.
pub fn report(args: fmt::Arguments<'_>) {
    let output = match &*TARGET.read() {
        Target::Disabled => return,
        Target::Stderr => None,
        Target::Custom(output) => Some(Arc::clone(output)),
    };

    let line = format!(
        "{} [LOGGER ERROR] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
        args
    );

    match output {
        // Invoked outside the lock so an output may itself reconfigure the target
        Some(output) => {
            let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| output(&line)));
        }
        None => eprintln!("{}", line),
    }
}

/// Convenience wrapper around [`report`] accepting `format!` arguments
#[macro_export]
macro_rules! self_log {
    ($($arg:tt)+) => {
        $crate::core::self_log::report(format_args!($($arg)+))
    };
}

#[cfg(test)]
pub(crate) mod testing {
    use parking_lot::{Mutex, MutexGuard};
    use std::sync::Arc;

    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    /// Capture self-diagnostics for the duration of a test.
    /// Tests touching the global target are serialized through this guard.
    pub(crate) struct Capture {
        pub(crate) lines: Arc<Mutex<Vec<String>>>,
        _serial: MutexGuard<'static, ()>,
    }

    impl Capture {
        pub(crate) fn start() -> Self {
            let serial = SERIAL.lock();
            let lines = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&lines);
            super::enable(move |line| sink.lock().push(line.to_string()));
            Self {
                lines,
                _serial: serial,
            }
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Drop for Capture {
        fn drop(&mut self) {
            super::reset();
        }
    }
}
