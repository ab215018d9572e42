//! Application state
//!
//! The four-state model the presentation layer renders.

pub mod app_state;

pub use app_state::{AppState, AppStatus, StateError, StateEvent};
