//! # Rust Structured Logger
//!
//! A structured event logger built around message templates. Each write
//! passes a level gate, is parsed and bound into a [`LogEvent`], decorated by
//! an enrichment chain and handed to a sink.
//!
//! ## Features
//!
//! - **Message Templates**: `"Order {OrderId} shipped to {@Address}"` keeps
//!   both the rendered text and the captured values
//! - **Level Switches**: a fixed floor plus a shared, runtime-adjustable level
//! - **Fault-Isolated Enrichment**: a failing enricher never breaks a write
//! - **Context Loggers**: derived loggers add properties and route through
//!   their parent
//! - **Sinks**: console, file, in-memory, fan-out and background delivery
//!
//! ## Example
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .enrich_with_property("Service", "billing", false)
//!     .sink(Arc::clone(&sink))
//!     .build()
//!     .unwrap();
//!
//! let jobs = logger.for_source_context("Billing.Jobs");
//! jobs.info("Processed {Count} invoices", (12,)).unwrap();
//!
//! let event = &sink.events()[0];
//! assert_eq!(event.render_message(), "Processed 12 invoices");
//! assert!(event.contains_property("Service"));
//! assert!(event.contains_property("SourceContext"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub use crate::core::self_log;

pub mod prelude {
    pub use crate::core::{
        CaptureLimits, CaptureValue, Captures, Enricher, EventError, EventSink,
        FixedPropertyEnricher, IntoCaptures, LevelSwitch, LogEvent, LogEventProperty,
        LogEventPropertyFactory, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerSettings, MessageTemplate, OutputFormat, OverflowPolicy, PropertyValue, Result,
        ScalarValue, TimestampFormat,
    };
    pub use crate::sinks::{AggregateSink, BackgroundSink, ConsoleSink, FileSink, MemorySink};
}

pub use crate::core::{
    CaptureLimits, CaptureValue, Captures, Destructuring, Enricher, EventError, EventSink,
    FixedPropertyEnricher, IntoCaptures, LevelSwitch, LogEvent, LogEventProperty,
    LogEventPropertyFactory, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    LoggerSettings, MessageTemplate, MessageTemplateProcessor, OutputFormat, OverflowCallback,
    OverflowPolicy, PropertyToken, PropertyValue, Result, ScalarValue, StructureValue,
    TemplateProcessor, TemplateToken, TimestampFormat, SOURCE_CONTEXT_PROPERTY_NAME,
};
pub use crate::sinks::{AggregateSink, BackgroundSink, ConsoleSink, FileSink, MemorySink};
