//! Error types for soffice-a11y-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soffice-a11y-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cell label does not have the `<letters><digits>` shape
    #[error("Invalid cell coordinate: {0:?}")]
    InvalidCoordinateFormat(String),

    /// Attribute run that covers no text
    #[error("Empty attribute run: {start}..{end}")]
    EmptyRun { start: usize, end: usize },

    /// Color string that could not be parsed
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

impl Error {
    /// Create an [`Error::InvalidCoordinateFormat`] for a label
    pub fn invalid_coordinate<S: Into<String>>(label: S) -> Self {
        Error::InvalidCoordinateFormat(label.into())
    }
}
