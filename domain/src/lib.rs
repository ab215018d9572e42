//! Domain layer for polyglot-tube
//!
//! This crate contains the core entities, value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Video reference**: the URL a learner submits. Its 11-character
//!   [`VideoId`] is extracted locally; the URL itself is handed to the model.
//! - **Learning content**: vocabulary, quiz and summary generated for one
//!   video, aggregated into [`LearningContent`].
//! - **Application state**: [`AppState`], the idle / loading / success / error
//!   machine the presentation layer renders.

pub mod config;
pub mod core;
pub mod learning;
pub mod prompt;
pub mod response;
pub mod state;
pub mod video;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::{error::DomainError, string::truncate};
pub use learning::{
    ContentIssue, ContentIssueCode, ContentKind, LearningContent, LearningSettings,
    OptionOutcome, ProficiencyLevel, QuizAttempt, QuizError, QuizQuestion, QuizScore,
    SummaryPayload, VocabularyItem, validate_content,
};
pub use prompt::PromptTemplate;
pub use response::{
    FORMAT_ERROR_MESSAGE, ParseError, parse_quiz, parse_summary, parse_vocabulary,
    strip_code_fence,
};
pub use state::{AppState, AppStatus, StateError, StateEvent};
pub use video::{VideoId, extract_video_id};
