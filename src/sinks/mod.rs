//! Sink implementations

pub mod aggregate;
pub mod background;
pub mod console;
pub mod file;
pub mod memory;

pub use aggregate::AggregateSink;
pub use background::{BackgroundSink, BackgroundSinkBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::EventSink;
