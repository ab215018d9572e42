//! Model response parser.
//!
//! The model is asked for bare minified JSON but sometimes wraps it in a
//! markdown fence (` ```json ... ``` `). The fence is stripped before
//! deserializing into the typed shape.
//!
//! Only the JSON shape is checked here. Semantic rules such as "the correct
//! answer is one of the options" are reported by
//! [`validate_content`](crate::learning::validate_content), never enforced.

use crate::learning::entities::{ContentKind, QuizQuestion, SummaryPayload, VocabularyItem};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// User-facing message for any malformed model response.
pub const FORMAT_ERROR_MESSAGE: &str =
    "The AI model returned a response in an unexpected format. Please try again.";

/// Parsing errors.
///
/// `Display` only shows the fixed user-facing message. The raw response and
/// the underlying deserializer error are kept on the value for logging.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("The AI model returned a response in an unexpected format. Please try again.")]
    UnexpectedFormat {
        kind: ContentKind,
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Which request produced the malformed response
    pub fn kind(&self) -> ContentKind {
        match self {
            ParseError::UnexpectedFormat { kind, .. } => *kind,
        }
    }

    /// The unmodified response text
    pub fn raw(&self) -> &str {
        match self {
            ParseError::UnexpectedFormat { raw, .. } => raw,
        }
    }
}

/// Remove a surrounding markdown code fence, if any.
///
/// Accepts a ` ```json ` or bare ` ``` ` opening fence and a trailing
/// ` ``` `. Text without a fence is returned trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

fn parse_as<T: DeserializeOwned>(kind: ContentKind, raw: &str) -> Result<T, ParseError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|source| ParseError::UnexpectedFormat {
        kind,
        raw: raw.to_string(),
        source,
    })
}

/// Parse a vocabulary response: `[{"word", "definition", "translation"}, ...]`
pub fn parse_vocabulary(raw: &str) -> Result<Vec<VocabularyItem>, ParseError> {
    parse_as(ContentKind::Vocabulary, raw)
}

/// Parse a quiz response: `[{"question", "options", "correctAnswer"}, ...]`
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, ParseError> {
    parse_as(ContentKind::Quiz, raw)
}

/// Parse a summary response: `{"summary": "..."}`
pub fn parse_summary(raw: &str) -> Result<String, ParseError> {
    parse_as::<SummaryPayload>(ContentKind::Summary, raw).map(|p| p.summary)
}
