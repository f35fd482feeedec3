//! Main logger implementation
//!
//! A [`Logger`] is a cheap handle over an immutable node: a level gate, an
//! ordered list of enrichers and a downstream sink. Deriving a context logger
//! creates a new node whose sink is the node it was derived from, so writes
//! through a derived logger walk back up the chain, passing every ancestor's
//! level gate and enrichers on the way to the terminal sink.

use super::{
    capture::{CaptureValue, IntoCaptures},
    config::LoggerSettings,
    enricher::{enrich_all, Enricher, FixedPropertyEnricher},
    error::{LoggerError, Result},
    level_switch::{LevelGate, LevelSwitch},
    log_event::{EventError, LogEvent},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    processor::{CaptureLimits, MessageTemplateProcessor, TemplateProcessor},
    property::{LogEventProperty, PropertyValue},
    sink::EventSink,
    template::MessageTemplate,
};
use crate::self_log;
use crate::sinks::AggregateSink;
use parking_lot::Mutex;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Property name used to tag events with their logical source
pub const SOURCE_CONTEXT_PROPERTY_NAME: &str = "SourceContext";

type ReleaseAction = Box<dyn FnOnce() + Send>;

struct LoggerNode {
    gate: LevelGate,
    sink: Arc<dyn EventSink>,
    enrichers: Box<[Arc<dyn Enricher>]>,
    processor: Arc<dyn MessageTemplateProcessor>,
    metrics: LoggerMetrics,
    /// Only the root of a derivation chain holds one
    release: Mutex<Option<ReleaseAction>>,
}

impl LoggerNode {
    #[inline]
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.gate.is_enabled(level)
    }

    fn write_event(&self, event: LogEvent) -> Result<()> {
        if !self.is_enabled(event.level()) {
            self.metrics.record_suppressed();
            return Ok(());
        }
        self.dispatch(event)
    }

    fn dispatch(&self, mut event: LogEvent) -> Result<()> {
        enrich_all(
            &mut event,
            &self.enrichers,
            self.processor.property_factory(),
            &self.metrics,
        );
        self.sink.emit(event)?;
        self.metrics.record_dispatched();
        Ok(())
    }
}

impl EventSink for LoggerNode {
    fn emit(&self, event: LogEvent) -> Result<()> {
        self.write_event(event)
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

/// Structured event logger
///
/// Cloning a `Logger` clones the handle, not the node; clones share the same
/// enrichers, sink and release action.
///
/// # Example
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .sink(Arc::clone(&sink))
///     .build()
///     .unwrap();
///
/// logger.info("Order {OrderId} shipped", (42,)).unwrap();
/// assert_eq!(sink.events()[0].render_message(), "Order 42 shipped");
/// ```
#[derive(Clone)]
pub struct Logger {
    node: Arc<LoggerNode>,
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether an event at `level` would be processed by this node
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.node.is_enabled(level)
    }

    /// Fixed floor of this node; derived loggers report `LogLevel::MIN`
    pub fn minimum_level(&self) -> LogLevel {
        self.node.gate.minimum_level()
    }

    pub fn level_switch(&self) -> Option<&LevelSwitch> {
        self.node.gate.switch()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.node.metrics
    }

    /// Templated write
    ///
    /// Empty templates and disabled levels return `Ok(())` without doing any
    /// work; capture arguments are not converted in that case. Errors come
    /// only from the sink.
    pub fn write<A: IntoCaptures>(&self, level: LogLevel, template: &str, args: A) -> Result<()> {
        self.write_with_error(level, None, template, args)
    }

    /// Templated write carrying an error
    pub fn write_with_error<A: IntoCaptures>(
        &self,
        level: LogLevel,
        error: Option<EventError>,
        template: &str,
        args: A,
    ) -> Result<()> {
        match self.build_event(level, error, template, args) {
            Some(event) => self.node.dispatch(event),
            None => {
                self.node.metrics.record_suppressed();
                Ok(())
            }
        }
    }

    /// Write an already constructed event, subject to this node's level gate
    pub fn write_event(&self, event: LogEvent) -> Result<()> {
        self.node.write_event(event)
    }

    fn build_event<A: IntoCaptures>(
        &self,
        level: LogLevel,
        error: Option<EventError>,
        template: &str,
        args: A,
    ) -> Option<LogEvent> {
        if template.is_empty() {
            return None;
        }

        if !self.is_enabled(level) {
            return None;
        }

        let values = args.into_captures().normalize();
        let timestamp = chrono::Local::now().fixed_offset();
        let (template, properties) = self.node.processor.process(template, values);

        Some(LogEvent::new(timestamp, level, error, template, properties))
    }

    #[inline]
    pub fn verbose<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Verbose, template, args)
    }

    #[inline]
    pub fn debug<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Debug, template, args)
    }

    #[inline]
    pub fn info<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Information, template, args)
    }

    #[inline]
    pub fn warn<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Warning, template, args)
    }

    #[inline]
    pub fn error<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Error, template, args)
    }

    #[inline]
    pub fn fatal<A: IntoCaptures>(&self, template: &str, args: A) -> Result<()> {
        self.write(LogLevel::Fatal, template, args)
    }

    #[inline]
    pub fn verbose_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Verbose, Some(Arc::new(error)), template, args)
    }

    #[inline]
    pub fn debug_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Debug, Some(Arc::new(error)), template, args)
    }

    #[inline]
    pub fn info_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Information, Some(Arc::new(error)), template, args)
    }

    #[inline]
    pub fn warn_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Warning, Some(Arc::new(error)), template, args)
    }

    #[inline]
    pub fn error_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Error, Some(Arc::new(error)), template, args)
    }

    #[inline]
    pub fn fatal_with_error<E, A>(&self, error: E, template: &str, args: A) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
        A: IntoCaptures,
    {
        self.write_with_error(LogLevel::Fatal, Some(Arc::new(error)), template, args)
    }

    /// Derive a logger that runs `enrichers` before handing events to this one
    ///
    /// The derived node does not copy this node's enrichers; they run when the
    /// event reaches this node. Its own gate is open, so filtering stays with
    /// the ancestors, which re-check every event's level.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_structured_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let root = Logger::builder().sink(Arc::clone(&sink)).build().unwrap();
    ///
    /// let request = root.for_context([Arc::new(FixedPropertyEnricher::new(
    ///     LogEventProperty::new("RequestId", "r-17").unwrap(),
    /// )) as Arc<dyn Enricher>]);
    ///
    /// request.info("Handled", ()).unwrap();
    /// assert!(sink.events()[0].contains_property("RequestId"));
    /// ```
    #[must_use]
    pub fn for_context<I>(&self, enrichers: I) -> Logger
    where
        I: IntoIterator<Item = Arc<dyn Enricher>>,
    {
        let parent: Arc<dyn EventSink> = Arc::clone(&self.node) as Arc<dyn EventSink>;

        Logger {
            node: Arc::new(LoggerNode {
                gate: LevelGate::open(),
                sink: parent,
                enrichers: enrichers.into_iter().collect(),
                processor: Arc::clone(&self.node.processor),
                metrics: LoggerMetrics::new(),
                release: Mutex::new(None),
            }),
        }
    }

    /// Derive a logger with a single enricher
    #[must_use]
    pub fn for_enricher<E: Enricher + 'static>(&self, enricher: E) -> Logger {
        self.for_context([Arc::new(enricher) as Arc<dyn Enricher>])
    }

    /// Derive a logger that attaches one property, captured once now
    pub fn for_property(
        &self,
        name: &str,
        value: impl Into<CaptureValue>,
        destructure: bool,
    ) -> Result<Logger> {
        let property = self.bind_property(name, value, destructure)?;
        Ok(self.for_enricher(FixedPropertyEnricher::new(property)))
    }

    /// Derive a logger tagging events with the fully-qualified name of `T`
    #[must_use]
    pub fn for_source<T: ?Sized>(&self) -> Logger {
        self.for_source_context(std::any::type_name::<T>())
    }

    /// Derive a logger tagging events with the given source name
    #[must_use]
    pub fn for_source_context(&self, source: &str) -> Logger {
        let property = LogEventProperty::with_static_name(
            SOURCE_CONTEXT_PROPERTY_NAME,
            PropertyValue::from(source),
        );
        self.for_enricher(FixedPropertyEnricher::new(property))
    }

    /// Parse a template and bind arguments without writing an event
    ///
    /// Returns `None` for an empty template.
    pub fn bind_message_template<A: IntoCaptures>(
        &self,
        template: &str,
        args: A,
    ) -> Option<(Arc<MessageTemplate>, Vec<LogEventProperty>)> {
        if template.is_empty() {
            return None;
        }
        Some(
            self.node
                .processor
                .process(template, args.into_captures().normalize()),
        )
    }

    /// Capture a single property through this logger's property factory
    pub fn bind_property(
        &self,
        name: &str,
        value: impl Into<CaptureValue>,
        destructure: bool,
    ) -> Result<LogEventProperty> {
        if !LogEventProperty::is_valid_name(name) {
            return Err(LoggerError::invalid_argument(
                "name",
                "property name must not be empty",
            ));
        }
        self.node
            .processor
            .property_factory()
            .create_property(name, value.into(), destructure)
    }

    /// Run the release action, if this is a root logger that still holds one
    ///
    /// The action runs at most once no matter how often `dispose` is called
    /// or through which clone. Derived loggers hold no action.
    pub fn dispose(&self) {
        let release = self.node.release.lock().take();
        if let Some(release) = release {
            release();
        }
    }

    /// Whether this node still holds a release action
    pub fn has_release_action(&self) -> bool {
        self.node.release.lock().is_some()
    }
}

impl EventSink for Logger {
    fn emit(&self, event: LogEvent) -> Result<()> {
        self.node.write_event(event)
    }

    fn flush(&self) -> Result<()> {
        self.node.flush()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("minimum_level", &self.node.gate.minimum_level())
            .field("level_switch", &self.node.gate.switch())
            .field("enrichers", &self.node.enrichers.len())
            .finish()
    }
}

enum PendingEnricher {
    Ready(Arc<dyn Enricher>),
    Property {
        name: String,
        value: CaptureValue,
        destructure: bool,
    },
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let switch = LevelSwitch::new(LogLevel::Information);
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .level_switch(switch.clone())
///     .enrich_with_property("Service", "billing", false)
///     .sink(MemorySink::new())
///     .build()
///     .unwrap();
///
/// assert!(!logger.is_enabled(LogLevel::Debug));
/// switch.set_minimum_level(LogLevel::Verbose);
/// assert!(logger.is_enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    level_switch: Option<LevelSwitch>,
    sinks: Vec<Arc<dyn EventSink>>,
    enrichers: Vec<PendingEnricher>,
    processor: Option<Arc<dyn MessageTemplateProcessor>>,
    capture_limits: CaptureLimits,
    on_dispose: Option<ReleaseAction>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Information,
            level_switch: None,
            sinks: Vec::new(),
            enrichers: Vec::new(),
            processor: None,
            capture_limits: CaptureLimits::default(),
            on_dispose: None,
        }
    }

    /// Create a builder preconfigured from settings
    pub fn from_settings(settings: &LoggerSettings) -> Result<Self> {
        Self::new().apply_settings(settings)
    }

    /// Apply minimum level and fixed properties from settings
    pub fn apply_settings(mut self, settings: &LoggerSettings) -> Result<Self> {
        if let Some(level) = settings.minimum_level()? {
            self.min_level = level;
        }
        if let Some(source) = &settings.source_context {
            self = self.enrich_with_property(SOURCE_CONTEXT_PROPERTY_NAME, source.as_str(), false);
        }
        for (name, value) in &settings.properties {
            self = self.enrich_with_property(name, CaptureValue::from(value.clone()), false);
        }
        Ok(self)
    }

    /// Set the fixed minimum level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Attach a shared level switch, consulted after the fixed floor
    #[must_use = "builder methods return a new value"]
    pub fn level_switch(mut self, switch: LevelSwitch) -> Self {
        self.level_switch = Some(switch);
        self
    }

    /// Add a sink; several sinks receive every event in registration order
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Add an enricher; enrichers run in the order they are added
    #[must_use = "builder methods return a new value"]
    pub fn enrich_with<E: Enricher + 'static>(mut self, enricher: E) -> Self {
        self.enrichers.push(PendingEnricher::Ready(Arc::new(enricher)));
        self
    }

    /// Add a fixed property, captured when the logger is built
    #[must_use = "builder methods return a new value"]
    pub fn enrich_with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<CaptureValue>,
        destructure: bool,
    ) -> Self {
        self.enrichers.push(PendingEnricher::Property {
            name: name.into(),
            value: value.into(),
            destructure,
        });
        self
    }

    /// Replace the default template processor
    #[must_use = "builder methods return a new value"]
    pub fn processor(mut self, processor: Arc<dyn MessageTemplateProcessor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Limits for the default template processor
    #[must_use = "builder methods return a new value"]
    pub fn capture_limits(mut self, limits: CaptureLimits) -> Self {
        self.capture_limits = limits;
        self
    }

    /// Action to run when the built logger is disposed, after sinks are flushed
    #[must_use = "builder methods return a new value"]
    pub fn on_dispose<F: FnOnce() + Send + 'static>(mut self, action: F) -> Self {
        self.on_dispose = Some(Box::new(action));
        self
    }

    /// Build the root Logger
    pub fn build(self) -> Result<Logger> {
        let mut sinks = self.sinks;
        let sink: Arc<dyn EventSink> = match sinks.len() {
            0 => {
                return Err(LoggerError::config(
                    "LoggerBuilder",
                    "at least one sink is required",
                ))
            }
            1 => sinks.remove(0),
            _ => Arc::new(AggregateSink::new(sinks)),
        };

        let processor = self
            .processor
            .unwrap_or_else(|| Arc::new(TemplateProcessor::with_limits(self.capture_limits)));

        let mut enrichers: Vec<Arc<dyn Enricher>> = Vec::with_capacity(self.enrichers.len());
        for pending in self.enrichers {
            match pending {
                PendingEnricher::Ready(enricher) => enrichers.push(enricher),
                PendingEnricher::Property {
                    name,
                    value,
                    destructure,
                } => {
                    let property = processor
                        .property_factory()
                        .create_property(&name, value, destructure)?;
                    enrichers.push(Arc::new(FixedPropertyEnricher::new(property)));
                }
            }
        }

        let flush_target = Arc::clone(&sink);
        let on_dispose = self.on_dispose;
        let release: ReleaseAction = Box::new(move || {
            if let Err(e) = flush_target.flush() {
                self_log!("Failed to flush sinks during dispose: {}", e);
            }
            if let Some(action) = on_dispose {
                action();
            }
        });

        Ok(Logger {
            node: Arc::new(LoggerNode {
                gate: LevelGate::new(self.min_level, self.level_switch),
                sink,
                enrichers: enrichers.into_boxed_slice(),
                processor,
                metrics: LoggerMetrics::new(),
                release: Mutex::new(Some(release)),
            }),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::self_log::testing::Capture;
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn root(min_level: LogLevel) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .min_level(min_level)
            .sink(Arc::clone(&sink))
            .build()
            .unwrap();
        (logger, sink)
    }

    #[test]
    fn test_builder_requires_sink() {
        let err = Logger::builder().build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_builder_rejects_invalid_property_name() {
        let err = Logger::builder()
            .sink(MemorySink::new())
            .enrich_with_property("", 1, false)
            .build()
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidArgument { .. }));
    }

    #[test]
    fn test_empty_template_is_a_no_op() {
        let (logger, sink) = root(LogLevel::Verbose);
        logger.fatal("", (1,)).unwrap();
        assert!(sink.is_empty());
        assert_eq!(logger.metrics().suppressed_count(), 1);
    }

    #[test]
    fn test_event_fields() {
        let (logger, sink) = root(LogLevel::Verbose);
        let before = chrono::Local::now().fixed_offset();
        logger
            .warn_with_error(
                std::io::Error::new(std::io::ErrorKind::Other, "timeout"),
                "Retrying {Attempt}",
                (3,),
            )
            .unwrap();

        let event = &sink.events()[0];
        assert_eq!(event.level(), LogLevel::Warning);
        assert_eq!(event.template().text(), "Retrying {Attempt}");
        assert_eq!(event.error().map(|e| e.to_string()), Some("timeout".to_string()));
        assert_eq!(event.property("Attempt"), Some(&PropertyValue::from(3i64)));
        assert!(event.timestamp() >= before);
    }

    #[test]
    fn test_rejected_delivery_is_not_counted() {
        struct Refusing;

        impl EventSink for Refusing {
            fn emit(&self, _event: LogEvent) -> Result<()> {
                Err(LoggerError::sink("Refusing", "disk full"))
            }
        }

        let logger = Logger::builder().sink(Refusing).build().unwrap();
        assert!(logger.info("lost", ()).is_err());
        assert_eq!(logger.metrics().dispatched_count(), 0);
    }

    #[test]
    fn test_write_event_respects_gate() {
        let (logger, sink) = root(LogLevel::Warning);
        let (template, properties) = logger.bind_message_template("x {P}", (1,)).unwrap();
        let now = chrono::Local::now().fixed_offset();

        let debug = LogEvent::new(
            now,
            LogLevel::Debug,
            None,
            Arc::clone(&template),
            properties.clone(),
        );
        logger.write_event(debug).unwrap();
        logger
            .write_event(LogEvent::new(now, LogLevel::Error, None, template, properties))
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level(), LogLevel::Error);
    }

    #[test]
    fn test_derived_logger_defaults() {
        let (logger, _sink) = root(LogLevel::Error);
        let child = logger.for_context(Vec::new());

        assert_eq!(child.minimum_level(), LogLevel::MIN);
        assert!(child.level_switch().is_none());
        assert!(child.is_enabled(LogLevel::Verbose));
        assert!(!child.has_release_action());
        assert!(logger.has_release_action());
    }

    #[test]
    fn test_derived_writes_pass_parent_gate() {
        let (logger, sink) = root(LogLevel::Warning);
        let child = logger.for_source_context("Jobs.Worker");

        child.info("ignored", ()).unwrap();
        child.error("kept", ()).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(child.metrics().dispatched_count(), 2);
        assert_eq!(logger.metrics().suppressed_count(), 1);
    }

    #[test]
    fn test_for_property_rejects_empty_name() {
        let (logger, _sink) = root(LogLevel::Verbose);
        assert!(logger.for_property("  ", 1, false).is_err());
    }

    #[test]
    fn test_dispose_runs_once_and_flushes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .sink(Arc::clone(&sink))
            .on_dispose(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        logger.for_source::<String>().dispose();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.dispose();
        logger.clone().dispose();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sink.flush_count(), 1);
    }

    #[test]
    fn test_enricher_panic_does_not_reach_caller() {
        let _capture = Capture::start();
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .sink(Arc::clone(&sink))
            .enrich_with(|_: &mut LogEvent, _: &dyn crate::LogEventPropertyFactory| -> Result<()> {
                panic!("boom")
            })
            .build()
            .unwrap();

        logger.info("still delivered", ()).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(logger.metrics().enricher_faults(), 1);
    }

    #[test]
    fn test_settings_are_applied() {
        let settings = LoggerSettings::from_json(
            r#"{"minimum_level": "warn", "source_context": "Billing", "properties": {"Region": "eu-1"}}"#,
        )
        .unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger = LoggerBuilder::from_settings(&settings)
            .unwrap()
            .sink(Arc::clone(&sink))
            .build()
            .unwrap();

        assert_eq!(logger.minimum_level(), LogLevel::Warning);
        logger.warn("hello", ()).unwrap();

        let event = &sink.events()[0];
        assert_eq!(
            event.property(SOURCE_CONTEXT_PROPERTY_NAME),
            Some(&PropertyValue::from("Billing"))
        );
        assert_eq!(event.property("Region"), Some(&PropertyValue::from("eu-1")));
    }
}
