//! Learning content entities.
//!
//! Field names follow the JSON schema the model is instructed to produce.

use serde::{Deserialize, Serialize};

/// Number of vocabulary items requested per video.
pub const VOCABULARY_SIZE: usize = 10;
/// Number of quiz questions requested per video.
pub const QUIZ_SIZE: usize = 5;
/// Number of options per quiz question.
pub const QUIZ_OPTIONS: usize = 4;

/// The three independently generated parts of [`LearningContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Vocabulary,
    Quiz,
    Summary,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Vocabulary => "vocabulary",
            ContentKind::Quiz => "quiz",
            ContentKind::Summary => "summary",
        }
    }

    pub fn all() -> [ContentKind; 3] {
        [ContentKind::Vocabulary, ContentKind::Quiz, ContentKind::Summary]
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single learned term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// The word or phrase in the learning language.
    pub word: String,
    /// Definition in the learning language, simplified for the learner's level.
    pub definition: String,
    /// Translation into the learner's native language.
    pub translation: String,
}

/// A multiple-choice comprehension question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Expected to equal one of `options`; not guaranteed by parsing.
    /// See [`validate_content`](super::validate_content).
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Whether `answer` is this question's correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Whether the correct answer appears among the options.
    pub fn has_valid_answer(&self) -> bool {
        self.options.iter().any(|o| o == &self.correct_answer)
    }
}

/// Wire shape of the summary response: `{"summary": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
}

/// Aggregate study material for one video.
///
/// Constructed once per successful generation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningContent {
    pub vocabulary: Vec<VocabularyItem>,
    pub quiz: Vec<QuizQuestion>,
    pub summary: String,
}

impl LearningContent {
    pub fn new(vocabulary: Vec<VocabularyItem>, quiz: Vec<QuizQuestion>, summary: String) -> Self {
        Self {
            vocabulary,
            quiz,
            summary,
        }
    }
}
