//! Core logger types and traits

pub mod capture;
pub mod config;
pub mod enricher;
pub mod error;
pub mod level_switch;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod overflow_policy;
pub mod processor;
pub mod property;
pub mod self_log;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use capture::{CaptureValue, Captures, IntoCaptures};
pub use config::LoggerSettings;
pub use enricher::{Enricher, FixedPropertyEnricher};
pub use error::{LoggerError, Result};
pub use level_switch::LevelSwitch;
pub use log_event::{EventError, LogEvent};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, SOURCE_CONTEXT_PROPERTY_NAME};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use overflow_policy::{OverflowCallback, OverflowPolicy};
pub use processor::{
    CaptureLimits, LogEventPropertyFactory, MessageTemplateProcessor, TemplateProcessor,
};
pub use property::{LogEventProperty, PropertyValue, ScalarValue, StructureValue};
pub use sink::EventSink;
pub use template::{Destructuring, MessageTemplate, PropertyToken, TemplateToken};
pub use timestamp::TimestampFormat;
