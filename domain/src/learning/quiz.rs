//! Quiz answering and scoring.
//!
//! A [`QuizAttempt`] tracks one pass through a quiz: the learner picks an
//! option per question, checks the answers once every question is answered,
//! and may then reset to try again.

use super::entities::QuizQuestion;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// How an option should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOutcome {
    /// Before checking: the learner picked this option.
    Selected,
    /// Before checking: not picked.
    Unselected,
    /// After checking: this is the correct answer.
    Correct,
    /// After checking: picked, but wrong.
    Incorrect,
    /// After checking: neither picked nor correct.
    Neutral,
}

/// Result of checking a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl std::fmt::Display for QuizScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}

/// One attempt at a quiz.
#[derive(Debug, Clone)]
pub struct QuizAttempt<'a> {
    questions: &'a [QuizQuestion],
    selected: Vec<Option<String>>,
    checked: bool,
}

impl<'a> QuizAttempt<'a> {
    pub fn new(questions: &'a [QuizQuestion]) -> Self {
        Self {
            questions,
            selected: vec![None; questions.len()],
            checked: false,
        }
    }

    pub fn questions(&self) -> &'a [QuizQuestion] {
        self.questions
    }

    /// Record an answer. Returns `false` when the selection was ignored:
    /// answers are locked once checked, and unknown questions or options
    /// are rejected.
    pub fn select(&mut self, index: usize, option: &str) -> bool {
        if self.checked {
            return false;
        }
        let Some(question) = self.questions.get(index) else {
            return false;
        };
        if !question.options.iter().any(|o| o == option) {
            return false;
        }
        self.selected[index] = Some(option.to_string());
        true
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.selected.get(index).and_then(|s| s.as_deref())
    }

    pub fn answered(&self) -> usize {
        self.selected.iter().filter(|s| s.is_some()).count()
    }

    /// Answers can be checked only when every question has a selection.
    pub fn can_check(&self) -> bool {
        !self.checked && self.answered() == self.questions.len()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Lock the answers and compute the score.
    pub fn check(&mut self) -> Result<QuizScore, QuizError> {
        if !self.checked && !self.can_check() {
            return Err(QuizError::Incomplete {
                answered: self.answered(),
                total: self.questions.len(),
            });
        }
        self.checked = true;
        Ok(self.score())
    }

    fn score(&self) -> QuizScore {
        let correct = self
            .questions
            .iter()
            .zip(&self.selected)
            .filter(|(q, s)| s.as_deref().is_some_and(|answer| q.is_correct(answer)))
            .count();
        QuizScore {
            correct,
            total: self.questions.len(),
        }
    }

    pub fn option_outcome(&self, index: usize, option: &str) -> OptionOutcome {
        let is_selected = self.selection(index) == Some(option);

        if !self.checked {
            return if is_selected {
                OptionOutcome::Selected
            } else {
                OptionOutcome::Unselected
            };
        }

        let is_correct = self
            .questions
            .get(index)
            .is_some_and(|q| q.is_correct(option));

        if is_correct {
            OptionOutcome::Correct
        } else if is_selected {
            OptionOutcome::Incorrect
        } else {
            OptionOutcome::Neutral
        }
    }

    /// Clear all answers and results ("try again").
    pub fn reset(&mut self) {
        self.selected = vec![None; self.questions.len()];
        self.checked = false;
    }
}
