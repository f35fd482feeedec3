//! Dynamic minimum-level control
//!
//! A [`LevelSwitch`] is a shared, externally owned cell holding a minimum
//! level. Loggers keep a handle to it and read it on every check, so a change
//! made through any clone is observed by every logger holding one.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Shared, atomically updated minimum level
///
/// # Example
///
/// ```
/// use rust_structured_logger::{LevelSwitch, LogLevel};
///
/// let switch = LevelSwitch::new(LogLevel::Information);
/// let observer = switch.clone();
///
/// switch.set_minimum_level(LogLevel::Warning);
/// assert_eq!(observer.minimum_level(), LogLevel::Warning);
/// ```
#[derive(Debug, Clone)]
pub struct LevelSwitch {
    minimum: Arc<AtomicU8>,
}

impl LevelSwitch {
    pub fn new(initial: LogLevel) -> Self {
        Self {
            minimum: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    /// Current minimum level. Always read fresh; never cached by callers.
    #[inline]
    pub fn minimum_level(&self) -> LogLevel {
        LogLevel::from_u8(self.minimum.load(Ordering::Relaxed))
    }

    pub fn set_minimum_level(&self, level: LogLevel) {
        self.minimum.store(level as u8, Ordering::Relaxed);
    }

    /// Whether two handles refer to the same underlying cell
    pub fn same_switch(&self, other: &LevelSwitch) -> bool {
        Arc::ptr_eq(&self.minimum, &other.minimum)
    }
}

impl Default for LevelSwitch {
    fn default() -> Self {
        Self::new(LogLevel::Information)
    }
}

/// Fixed floor plus optional shared override
///
/// The floor is a plain field compared first, so the common case of a logger
/// without dynamic reconfiguration never touches shared state.
#[derive(Debug, Clone)]
pub(crate) struct LevelGate {
    minimum_level: LogLevel,
    switch: Option<LevelSwitch>,
}

impl LevelGate {
    pub(crate) fn new(minimum_level: LogLevel, switch: Option<LevelSwitch>) -> Self {
        Self {
            minimum_level,
            switch,
        }
    }

    /// A gate that lets every level through
    pub(crate) fn open() -> Self {
        Self::new(LogLevel::MIN, None)
    }

    #[inline]
    pub(crate) fn is_enabled(&self, level: LogLevel) -> bool {
        if level < self.minimum_level {
            return false;
        }

        match &self.switch {
            Some(switch) => level >= switch.minimum_level(),
            None => true,
        }
    }

    pub(crate) fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    pub(crate) fn switch(&self) -> Option<&LevelSwitch> {
        self.switch.as_ref()
    }
}
