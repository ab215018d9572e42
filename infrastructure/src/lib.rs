//! Infrastructure layer for polyglot-tube
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLearningConfig, FileOutputConfig,
};
pub use gemini::{GeminiConfig, GeminiContentGenerator, GeminiError};
