//! Console sink implementation

use crate::core::{EventSink, LogEvent, LogLevel, OutputFormat, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    /// Colors only take effect with the `console` feature enabled
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this sink
    ///
    /// # Example
    ///
    /// ```
    /// use rust_structured_logger::sinks::ConsoleSink;
    /// use rust_structured_logger::OutputFormat;
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_text(&self, event: &LogEvent) -> String {
        let line = OutputFormat::Text.format(event, &self.timestamp_format);
        if !self.use_colors {
            return line;
        }
        colorize_level(&line, event.level())
    }
}

#[cfg(feature = "console")]
fn colorize_level(line: &str, level: LogLevel) -> String {
    let tag = format!("[{}]", level.short_name());
    line.replacen(&tag, &tag.color(color_code(level)).to_string(), 1)
}

#[cfg(not(feature = "console"))]
fn colorize_level(line: &str, _level: LogLevel) -> String {
    line.to_string()
}

#[cfg(feature = "console")]
fn color_code(level: LogLevel) -> colored::Color {
    match level {
        LogLevel::Verbose => colored::Color::BrightBlack,
        LogLevel::Debug => colored::Color::Cyan,
        LogLevel::Information => colored::Color::Green,
        LogLevel::Warning => colored::Color::Yellow,
        LogLevel::Error => colored::Color::Red,
        LogLevel::Fatal => colored::Color::Magenta,
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: LogEvent) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(&event),
            OutputFormat::Json => self.output_format.format(&event, &self.timestamp_format),
        };

        // Route Error and Fatal levels to stderr, others to stdout
        match event.level() {
            LogLevel::Error | LogLevel::Fatal => writeln!(std::io::stderr().lock(), "{}", output)?,
            _ => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageTemplate;

    #[test]
    fn test_plain_text_without_colors() {
        let sink = ConsoleSink::with_colors(false);
        let event = LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Error,
            None,
            MessageTemplate::parse("disk full"),
            Vec::new(),
        );
        let line = sink.format_text(&event);
        assert!(line.contains("[ERR] disk full"));
        assert!(sink.emit(event).is_ok());
    }
}
