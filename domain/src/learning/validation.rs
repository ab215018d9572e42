//! Semantic checks on generated content.
//!
//! The response parser only guarantees the JSON shape. The model is told to
//! produce 10 distinct words, 5 questions with 4 options, and a correct answer
//! that matches one option, but nothing enforces that. These checks surface
//! violations as non-fatal issues so callers can log or display them without
//! discarding otherwise usable content.

use super::entities::{LearningContent, QUIZ_OPTIONS, QUIZ_SIZE, VOCABULARY_SIZE};
use std::collections::HashSet;

/// Identifies a specific content issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentIssueCode {
    VocabularyCount,
    DuplicateWord,
    QuizCount,
    OptionCount,
    AnswerNotInOptions,
    EmptySummary,
}

/// A detected issue in generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub code: ContentIssueCode,
    pub message: String,
}

impl ContentIssue {
    fn new(code: ContentIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Check generated content against the contract given to the model.
pub fn validate_content(content: &LearningContent) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if content.vocabulary.len() != VOCABULARY_SIZE {
        issues.push(ContentIssue::new(
            ContentIssueCode::VocabularyCount,
            format!(
                "expected {} vocabulary items, got {}",
                VOCABULARY_SIZE,
                content.vocabulary.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    for item in &content.vocabulary {
        if !seen.insert(item.word.to_lowercase()) {
            issues.push(ContentIssue::new(
                ContentIssueCode::DuplicateWord,
                format!("duplicate vocabulary word '{}'", item.word),
            ));
        }
    }

    if content.quiz.len() != QUIZ_SIZE {
        issues.push(ContentIssue::new(
            ContentIssueCode::QuizCount,
            format!(
                "expected {} quiz questions, got {}",
                QUIZ_SIZE,
                content.quiz.len()
            ),
        ));
    }

    for (i, question) in content.quiz.iter().enumerate() {
        if question.options.len() != QUIZ_OPTIONS {
            issues.push(ContentIssue::new(
                ContentIssueCode::OptionCount,
                format!(
                    "question {} has {} options, expected {}",
                    i + 1,
                    question.options.len(),
                    QUIZ_OPTIONS
                ),
            ));
        }
        if !question.has_valid_answer() {
            issues.push(ContentIssue::new(
                ContentIssueCode::AnswerNotInOptions,
                format!(
                    "question {}: correct answer '{}' is not one of the options",
                    i + 1,
                    question.correct_answer
                ),
            ));
        }
    }

    if content.summary.trim().is_empty() {
        issues.push(ContentIssue::new(
            ContentIssueCode::EmptySummary,
            "summary is empty",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::entities::{QuizQuestion, VocabularyItem};

    fn vocabulary(n: usize) -> Vec<VocabularyItem> {
        (0..n)
            .map(|i| VocabularyItem {
                word: format!("Wort{}", i),
                definition: "Definition".to_string(),
                translation: "word".to_string(),
            })
            .collect()
    }

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Frage?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct.to_string(),
        }
    }

    fn codes(issues: &[ContentIssue]) -> Vec<ContentIssueCode> {
        issues.iter().map(|i| i.code).collect()
    }

    #[test]
    fn test_conforming_content_has_no_issues() {
        let content = LearningContent::new(
            vocabulary(10),
            (0..5).map(|_| question("a")).collect(),
            "Eine kurze Zusammenfassung.".to_string(),
        );
        assert!(validate_content(&content).is_empty());
    }

    #[test]
    fn test_answer_not_in_options() {
        let mut quiz: Vec<_> = (0..5).map(|_| question("a")).collect();
        quiz[2] = question("z");
        let content = LearningContent::new(vocabulary(10), quiz, "ok".to_string());

        let issues = validate_content(&content);
        assert_eq!(codes(&issues), vec![ContentIssueCode::AnswerNotInOptions]);
        assert!(issues[0].message.contains("question 3"));
    }

    #[test]
    fn test_counts_duplicates_and_summary() {
        let mut vocab = vocabulary(3);
        vocab[2].word = "wort0".to_string();
        let mut q = question("a");
        q.options.pop();
        let content = LearningContent::new(vocab, vec![q], "  ".to_string());

        assert_eq!(
            codes(&validate_content(&content)),
            vec![
                ContentIssueCode::VocabularyCount,
                ContentIssueCode::DuplicateWord,
                ContentIssueCode::QuizCount,
                ContentIssueCode::OptionCount,
                ContentIssueCode::EmptySummary,
            ]
        );
    }
}
