//! Error types for standardize-pages
//!
//! Extraction failures are contained per file by the batch driver, while
//! filesystem faults propagate and stop the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for page standardization
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Template construction errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// I/O errors, tagged with the file that caused them
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Content extraction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No strategy located a content region
    #[error("Could not extract content: no container, and no </nav> ... <footer region")]
    NoContent,
}

/// Template errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder is missing or appears more than once
    #[error("Placeholder {name} must appear exactly once, found {count}")]
    Placeholder {
        /// Placeholder token, e.g. `{title}`
        name: &'static str,
        /// Number of occurrences found
        count: usize,
    },
}

/// Result type alias for page standardization
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
