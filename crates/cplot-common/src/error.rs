//! Error types and utilities for cplot

use thiserror::Error;

/// Result type alias for cplot operations
pub type Result<T> = std::result::Result<T, CplotError>;

/// Main error type for cplot operations
#[derive(Error, Debug)]
pub enum CplotError {
    /// Invocation errors (wrong arguments)
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row whose fields are not both numeric, or with the wrong
    /// number of fields. The whole run aborts; rows are never skipped.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        line: u64,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Zero rows after a successful parse
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// Graph composition and rendering errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for internal parameters
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl CplotError {
    /// Create a new usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage {
            message: msg.into(),
        }
    }

    /// Create a new malformed row error
    pub fn malformed_row(line: u64, msg: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new malformed row error with source
    pub fn malformed_row_with_source(
        line: u64,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedRow {
            line,
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new empty dataset error
    pub fn empty_dataset(msg: impl Into<String>) -> Self {
        Self::EmptyDataset {
            message: msg.into(),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to CplotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for CplotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart rendering failed", err)
    }
}
