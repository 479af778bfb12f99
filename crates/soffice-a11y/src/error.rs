//! Error types for the adapter layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Core(#[from] soffice_a11y_core::Error),

    #[error("Accessibility call failed: {0}")]
    Source(String),

    #[error("Interface not implemented: {0}")]
    MissingInterface(&'static str),
}

impl AdapterError {
    pub fn call_failed<S: Into<String>>(msg: S) -> Self {
        AdapterError::Source(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
