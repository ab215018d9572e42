//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidVideoUrl(String),

    #[error("Invalid video identifier: {0}")]
    InvalidVideoId(String),

    #[error("Unknown proficiency level: {0} (expected beginner, intermediate or advanced)")]
    InvalidProficiency(String),

    #[error("{0} cannot be empty")]
    EmptyLanguage(&'static str),
}

impl DomainError {
    /// Check if this error was caused by the user's URL input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidVideoUrl(_) | DomainError::InvalidVideoId(_)
        )
    }
}
