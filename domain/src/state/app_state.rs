//! Application state machine.
//!
//! ```text
//!   Idle ──Submit──▶ Loading ──Resolve──▶ Success
//!    │                 │                     │
//!    │               Reject                Submit ──▶ Loading
//!    │                 ▼                     │
//!    └───Reject───▶  Error ◀────Reject───────┘
//!                      │
//!                    Submit ──▶ Loading
//! ```
//!
//! `Reject` is accepted from any state so invalid input can fail without
//! entering `Loading`. There is no path from `Idle` straight to `Success`,
//! and no cancellation: `Submit` while `Loading` is refused.

use crate::learning::entities::LearningContent;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot apply {event} while {from}")]
    InvalidTransition {
        from: AppStatus,
        event: &'static str,
    },
}

/// Discriminant of [`AppState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl AppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStatus::Idle => "idle",
            AppStatus::Loading => "loading",
            AppStatus::Success => "success",
            AppStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for AppStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Events that drive the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// A request was submitted; carries the progress message.
    Submit(String),
    /// Generation completed.
    Resolve(LearningContent),
    /// Input was invalid or generation failed; carries the user-facing message.
    Reject(String),
}

impl StateEvent {
    fn name(&self) -> &'static str {
        match self {
            StateEvent::Submit(_) => "submit",
            StateEvent::Resolve(_) => "resolve",
            StateEvent::Reject(_) => "reject",
        }
    }
}

/// The application state. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Idle,
    Loading {
        message: String,
    },
    Success {
        content: LearningContent,
    },
    Error {
        message: String,
    },
}

impl AppState {
    pub fn status(&self) -> AppStatus {
        match self {
            AppState::Idle => AppStatus::Idle,
            AppState::Loading { .. } => AppStatus::Loading,
            AppState::Success { .. } => AppStatus::Success,
            AppState::Error { .. } => AppStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AppState::Loading { .. })
    }

    /// Progress or error message, if the state carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            AppState::Loading { message } | AppState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&LearningContent> {
        match self {
            AppState::Success { content } => Some(content),
            _ => None,
        }
    }

    /// Compute the next state without modifying `self`.
    pub fn next(&self, event: StateEvent) -> Result<AppState, StateError> {
        match (self, event) {
            (AppState::Loading { .. }, StateEvent::Submit(_)) => {
                Err(StateError::InvalidTransition {
                    from: AppStatus::Loading,
                    event: "submit",
                })
            }
            (_, StateEvent::Submit(message)) => Ok(AppState::Loading { message }),
            (AppState::Loading { .. }, StateEvent::Resolve(content)) => {
                Ok(AppState::Success { content })
            }
            (_, StateEvent::Reject(message)) => Ok(AppState::Error { message }),
            (state, event) => Err(StateError::InvalidTransition {
                from: state.status(),
                event: event.name(),
            }),
        }
    }

    /// Replace the state wholesale with the result of `event`.
    ///
    /// On error the state is left unchanged.
    pub fn apply(&mut self, event: StateEvent) -> Result<(), StateError> {
        *self = self.next(event)?;
        Ok(())
    }
}
