//! Enrichers: pluggable units that add properties to events
//!
//! Enrichment is best-effort decoration. The chain runs each enricher inside
//! its own isolation boundary: a returned error or a panic is reported to
//! self-diagnostics and the remaining enrichers still run.

use super::error::Result;
use super::log_event::LogEvent;
use super::metrics::LoggerMetrics;
use super::processor::LogEventPropertyFactory;
use super::property::LogEventProperty;
use crate::self_log;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Adds or overwrites properties on an event
///
/// Enrichers only reach the event's property mapping; timestamp, level,
/// template and error are not writable through `LogEvent`.
///
/// # Example
///
/// ```
/// use rust_structured_logger::prelude::*;
///
/// struct ThreadName;
///
/// impl Enricher for ThreadName {
///     fn enrich(&self, event: &mut LogEvent, factory: &dyn LogEventPropertyFactory) -> Result<()> {
///         let name = std::thread::current().name().unwrap_or("unnamed").to_string();
///         event.add_property_if_absent(factory.create_property("ThreadName", name.into(), false)?);
///         Ok(())
///     }
/// }
/// ```
pub trait Enricher: Send + Sync {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn LogEventPropertyFactory) -> Result<()>;

    /// Name used when reporting faults
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Enricher for F
where
    F: Fn(&mut LogEvent, &dyn LogEventPropertyFactory) -> Result<()> + Send + Sync,
{
    fn enrich(&self, event: &mut LogEvent, factory: &dyn LogEventPropertyFactory) -> Result<()> {
        self(event, factory)
    }
}

/// Attaches one precomputed property, unless the event already carries it
#[derive(Debug, Clone)]
pub struct FixedPropertyEnricher {
    property: LogEventProperty,
}

impl FixedPropertyEnricher {
    pub fn new(property: LogEventProperty) -> Self {
        Self { property }
    }

    pub fn property(&self) -> &LogEventProperty {
        &self.property
    }
}

impl Enricher for Arc<dyn Enricher> {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn LogEventPropertyFactory) -> Result<()> {
        (**self).enrich(event, factory)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl Enricher for FixedPropertyEnricher {
    fn enrich(&self, event: &mut LogEvent, _factory: &dyn LogEventPropertyFactory) -> Result<()> {
        event.add_property_if_absent(self.property.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "FixedPropertyEnricher"
    }
}

/// Run `enrichers` over `event` in order, isolating each one's failures
pub(crate) fn enrich_all(
    event: &mut LogEvent,
    enrichers: &[Arc<dyn Enricher>],
    factory: &dyn LogEventPropertyFactory,
    metrics: &LoggerMetrics,
) {
    for enricher in enrichers {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| enricher.enrich(event, factory)));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                metrics.record_enricher_fault();
                self_log!(
                    "Enricher {} failed while enriching event `{}`: {}",
                    enricher.name(),
                    event.template().text(),
                    e
                );
            }
            Err(panic_info) => {
                metrics.record_enricher_fault();
                self_log!(
                    "Enricher {} panicked while enriching event `{}`: {}",
                    enricher.name(),
                    event.template().text(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
