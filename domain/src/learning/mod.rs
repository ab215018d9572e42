//! Learning domain
//!
//! The study material generated for one video and the learner's settings.

pub mod entities;
pub mod quiz;
pub mod settings;
pub mod validation;

pub use entities::{ContentKind, LearningContent, QuizQuestion, SummaryPayload, VocabularyItem};
pub use quiz::{OptionOutcome, QuizAttempt, QuizError, QuizScore};
pub use settings::{LearningSettings, ProficiencyLevel};
pub use validation::{ContentIssue, ContentIssueCode, validate_content};
