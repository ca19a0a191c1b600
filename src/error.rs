//! Error handling for weather report extraction.
//!
//! Only conditions that stop a run are errors. A line that does not match
//! the reading grammar is reported through diagnostics and the run goes on.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Line source unavailable: {path} - {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed source: {path} - {reason}")]
    MalformedSource { path: PathBuf, reason: String },

    #[error("Tabular sink unavailable: {target} - {reason}")]
    SinkUnavailable { target: String, reason: String },

    #[error("Invalid reading pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ExtractError {
    /// Create a source error for the given path
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an error for input that was read but could not be parsed
    pub fn malformed_source(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedSource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a sink error for the given target
    pub fn sink_unavailable(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::SinkUnavailable {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from reading input
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::MalformedSource { .. }
        )
    }

    /// Whether this error came from writing output
    pub fn is_sink_error(&self) -> bool {
        matches!(self, Self::SinkUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
