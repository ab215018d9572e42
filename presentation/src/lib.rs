//! Presentation layer for polyglot-tube
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, StudyReport};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::interactive::InteractiveQuiz;
