//! Hard errors surfaced by the widget pipeline.
//!
//! Anything that reaches the caller as a `WidgetError` aborted the render.
//! Failures in optional features never show up here; they are reported
//! through [`crate::telemetry::ErrorReporter`] and replaced with defaults.

use thiserror::Error;

/// Pipeline error surfaced to the embedding caller
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Malformed or out-of-bounds request parameter
    #[error("{0}")]
    InvalidInput(String),

    /// Chapter metadata could not be loaded for the requested chapter
    #[error("Invalid chapter requested")]
    InvalidChapter,

    /// Every verse fetch for the computed key set came back empty
    #[error("No verses returned for the requested range")]
    NotFoundRange,
}

impl WidgetError {
    /// Create an input validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WidgetError::InvalidInput(message.into())
    }

    /// HTTP-style status the embedding caller should render.
    ///
    /// All hard failures stem from caller-supplied identifiers, so they are
    /// reported as bad requests.
    pub fn status(&self) -> u16 {
        match self {
            WidgetError::InvalidInput(_) => 400,
            WidgetError::InvalidChapter => 400,
            WidgetError::NotFoundRange => 400,
        }
    }

    /// Whether this error came from request validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, WidgetError::InvalidInput(_))
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, WidgetError>;
