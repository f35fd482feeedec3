//! Sink trait for event consumers

use super::{error::Result, log_event::LogEvent};
use std::sync::Arc;

/// Downstream consumer of log events
///
/// A sink may be a terminal writer or another logger node. Errors returned
/// from `emit` are not handled by the pipeline; they travel back to whoever
/// made the original write call.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LogEvent) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: LogEvent) -> Result<()> {
        (**self).emit(event)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&self, event: LogEvent) -> Result<()> {
        (**self).emit(event)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
