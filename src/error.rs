//! Error types for the annotation summary library.
//!
//! This module defines all error types that can occur while filtering
//! annotations and building region summaries.

/// Result type alias for annotation summary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during summary processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Annotation modification date could not be parsed
    #[error("Invalid modification date '{value}': {reason}")]
    DateParse {
        /// The raw date string as found on the annotation
        value: String,
        /// Reason for the parse failure
        reason: String,
    },

    /// Page selection expression could not be parsed
    #[error("Invalid page selection '{0}': expected e.g. '2-6, 9, 12-16'")]
    InvalidPageSelection(String),

    /// Requested page does not exist in the source document
    #[error("Page index {0} out of range")]
    PageOutOfRange(usize),

    /// Processing was cancelled between pages
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
