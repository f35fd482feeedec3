//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required argument was missing or malformed at construction time
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// An enricher reported a failure while decorating an event
    #[error("Enricher '{enricher}' failed: {message}")]
    Enrichment { enricher: String, message: String },

    /// A sink could not accept an event
    #[error("Sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Channel send error
    #[error("Failed to send log event to background worker")]
    ChannelSendError,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an enrichment error
    pub fn enrichment(enricher: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Enrichment {
            enricher: enricher.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_argument("name", "must not be empty");
        assert!(matches!(err, LoggerError::InvalidArgument { .. }));

        let err = LoggerError::config("LoggerBuilder", "no sink configured");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::sink("memory", "closed");
        assert!(matches!(err, LoggerError::Sink { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_argument("name", "must not be empty");
        assert_eq!(err.to_string(), "Invalid argument 'name': must not be empty");

        let err = LoggerError::enrichment("MachineName", "lookup failed");
        assert_eq!(err.to_string(), "Enricher 'MachineName' failed: lookup failed");

        let err = LoggerError::config("LoggerBuilder", "no sink configured");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerBuilder: no sink configured"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
