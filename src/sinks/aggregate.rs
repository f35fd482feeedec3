//! Fan-out to several sinks

use crate::core::{EventSink, LogEvent, LoggerError, Result};
use std::sync::Arc;

/// Hands every event to each inner sink in order
///
/// Every sink is attempted even when an earlier one fails; the first error is
/// returned once all have run.
pub struct AggregateSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl AggregateSink {
    pub fn new(sinks: Vec<Arc<dyn EventSink>>) -> Self {
        Self { sinks }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn for_each(&self, mut f: impl FnMut(&dyn EventSink) -> Result<()>) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;
        for sink in &self.sinks {
            if let Err(e) = f(sink.as_ref()) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl EventSink for AggregateSink {
    fn emit(&self, event: LogEvent) -> Result<()> {
        match self.sinks.split_last() {
            None => Ok(()),
            Some((last, rest)) => {
                let mut first_error: Option<LoggerError> = None;
                for sink in rest {
                    if let Err(e) = sink.emit(event.clone()) {
                        first_error.get_or_insert(e);
                    }
                }
                if let Err(e) = last.emit(event) {
                    first_error.get_or_insert(e);
                }
                first_error.map_or(Ok(()), Err)
            }
        }
    }

    fn flush(&self) -> Result<()> {
        self.for_each(|sink| sink.flush())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, MessageTemplate};
    use crate::sinks::MemorySink;

    struct Broken;

    impl EventSink for Broken {
        fn emit(&self, _event: LogEvent) -> Result<()> {
            Err(LoggerError::sink("Broken", "unavailable"))
        }
    }

    fn event() -> LogEvent {
        LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Information,
            None,
            MessageTemplate::parse("fan out"),
            Vec::new(),
        )
    }

    #[test]
    fn test_every_sink_receives_event() {
        let a = Arc::new(MemorySink::new());
        let b = Arc::new(MemorySink::new());
        let sink = AggregateSink::new(vec![
            Arc::clone(&a) as Arc<dyn EventSink>,
            Arc::clone(&b) as Arc<dyn EventSink>,
        ]);

        sink.emit(event()).unwrap();
        sink.flush().unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(b.flush_count(), 1);
    }

    #[test]
    fn test_failure_does_not_skip_later_sinks() {
        let memory = Arc::new(MemorySink::new());
        let sink = AggregateSink::new(vec![
            Arc::new(Broken) as Arc<dyn EventSink>,
            Arc::clone(&memory) as Arc<dyn EventSink>,
        ]);

        let err = sink.emit(event()).unwrap_err();
        assert!(matches!(err, LoggerError::Sink { .. }));
        assert_eq!(memory.len(), 1);
    }
}
