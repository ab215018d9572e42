//! Gemini REST adapter
//!
//! Sends each [`ContentRequest`](polyglot_application::ContentRequest) as a
//! `generateContent` call with the video attached as file data.

pub mod error;
pub mod generator;
pub mod protocol;

pub use error::GeminiError;
pub use generator::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiConfig, GeminiContentGenerator};
