//! Error types for the level router

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
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

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown channel level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl RouterError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        RouterError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        RouterError::InvalidLevel(name.into())
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        RouterError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        RouterError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RouterError::writer("sink closed");
        assert!(matches!(err, RouterError::WriterError(_)));

        let err = RouterError::file_appender("/var/log/app.log", "Permission denied");
        assert!(matches!(err, RouterError::FileAppenderError { .. }));

        let err = RouterError::invalid_level("loud");
        assert!(matches!(err, RouterError::InvalidLevel(_)));
    }

    #[test]
    fn test_error_display() {
        let err = RouterError::invalid_level("loud");
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");

        let err = RouterError::file_appender("/var/log/app.log", "writer not initialized");
        assert_eq!(
            err.to_string(),
            "File appender error for '/var/log/app.log': writer not initialized"
        );

        let err = RouterError::writer("sink closed");
        assert_eq!(err.to_string(), "Writer error: sink closed");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u8>("\"loud\"").unwrap_err();
        let err: RouterError = json_err.into();
        assert!(matches!(err, RouterError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = RouterError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, RouterError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
