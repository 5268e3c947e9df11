use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PamsError {
    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Console I/O failed: {message}")]
    ConsoleError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {field} - {message}")]
    ConfigError {
        field: String,
        message: String,
        value: Option<String>,
    },
}

impl PamsError {
    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn console_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConsoleError {
            message: message.into(),
            source,
        }
    }

    pub fn config_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ConfigError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}
