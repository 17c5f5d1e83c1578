//! Core error types for Medialib

use thiserror::Error;

/// Result type alias using `MediaError`
pub type Result<T> = std::result::Result<T, MediaError>;

/// Core error type for Medialib
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    /// Duration is negative, NaN or infinite
    #[error("Invalid duration for {title:?}: {duration} (must be a finite, non-negative number of seconds)")]
    InvalidDuration {
        /// Title of the rejected item
        title: String,
        /// Rejected duration in seconds
        duration: f32,
    },
}

impl MediaError {
    /// Create an invalid duration error
    pub fn invalid_duration(title: impl Into<String>, duration: f32) -> Self {
        Self::InvalidDuration {
            title: title.into(),
            duration,
        }
    }
}
