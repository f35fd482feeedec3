//! File sink implementation

use crate::core::{EventSink, LogEvent, LoggerError, OutputFormat, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one formatted record per event to a file
///
/// Writes are buffered; call `flush` (or dispose the owning logger) to push
/// them to disk. JSON output yields one object per line.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation("create log directory", parent.display().to_string(), e)
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("open log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        })
    }

    /// Set the timestamp format for this sink
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_structured_logger::sinks::FileSink;
    /// use rust_structured_logger::{OutputFormat, TimestampFormat};
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_output_format(OutputFormat::Json)
    ///     .with_timestamp_format(TimestampFormat::Utc);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for FileSink {
    fn emit(&self, event: LogEvent) -> Result<()> {
        let mut output = self.output_format.format(&event, &self.timestamp_format);
        output.push('\n');

        self.writer
            .lock()
            .write_all(output.as_bytes())
            .map_err(|e| {
                LoggerError::io_operation("write log file", self.path.display().to_string(), e)
            })
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| {
                LoggerError::io_operation("flush log file", self.path.display().to_string(), e)
            })
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, LogEventProperty, MessageTemplate};

    fn event(message: &str) -> LogEvent {
        LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Information,
            None,
            MessageTemplate::parse(message),
            vec![LogEventProperty::new("Job", "sync").unwrap()],
        )
    }

    #[test]
    fn test_writes_text_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        let sink = FileSink::new(&path).unwrap();

        sink.emit(event("first")).unwrap();
        sink.emit(event("second")).unwrap();
        sink.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INF] first"));
        assert!(lines[1].contains("Job=\"sync\""));
    }

    #[test]
    fn test_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        let sink = FileSink::new(&path).unwrap().with_output_format(OutputFormat::Json);

        sink.emit(event("hello")).unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["properties"]["Job"], "sync");
    }
}
