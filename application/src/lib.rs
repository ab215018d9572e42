//! Application layer for polyglot-tube
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    content_generator::{
        ContentGenerator, ContentRequest, GatewayError, MediaReference, VIDEO_MIME_TYPE,
    },
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::generate_content::{
    GenerateContentError, GenerateContentInput, GenerateContentUseCase,
};
pub use use_cases::study_session::{
    FAILURE_PREFIX, INVALID_URL_MESSAGE, LOADING_MESSAGE, PendingRequest, StudySession,
    SubmitError,
};
