//! Presentation-level configuration
//!
//! Resolved output settings after merging CLI flags over the config file.

use crate::cli::commands::Cli;
use polyglot_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over file settings.
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();

        Self {
            format,
            color: file_color,
            // Progress would interleave with the machine-readable output
            show_progress: !cli.quiet && format != OutputFormat::Json,
        }
    }

    /// Whether interactive prompts must stay off stdout
    pub fn prompts_on_stderr(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the color preference process-wide.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
