//! CLI command definitions

use clap::{Parser, ValueEnum};
use polyglot_domain::ProficiencyLevel;
use std::path::PathBuf;

/// Output format for generated study material
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Vocabulary, quiz and summary
    Full,
    /// Only the summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for polyglot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for polyglot-tube
#[derive(Parser, Debug)]
#[command(name = "polyglot-tube")]
#[command(author, version, about = "Turn a YouTube video into vocabulary, a quiz and a summary")]
#[command(long_about = r#"
Polyglot Tube asks Gemini to watch a YouTube video and produce study material
in the language you are learning:

1. Vocabulary: 10 key words with definitions and translations
2. Quiz: 5 multiple-choice comprehension questions
3. Summary: a short paragraph about the video

The three parts are generated in parallel. The API key is read from
GEMINI_API_KEY (or API_KEY), falling back to [gemini].api_key in the config.

Configuration files are loaded from (later entries win):
1. ~/.config/polyglot-tube/config.toml   Global config
2. ./polyglot.toml                       Project-level config
3. --config <path>                       Explicit config file
4. POLYGLOT_* environment variables

Example:
  polyglot-tube "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
  polyglot-tube -l Spanish -n English --level beginner https://youtu.be/dQw4w9WgXcQ
  polyglot-tube --quiz "https://www.youtube.com/shorts/dQw4w9WgXcQ"
"#)]
pub struct Cli {
    /// YouTube video URL
    #[arg(required_unless_present = "show_config")]
    pub url: Option<String>,

    /// Language you are learning
    #[arg(short, long, value_name = "LANGUAGE")]
    pub learning_language: Option<String>,

    /// Your native language, used for translations
    #[arg(short, long, value_name = "LANGUAGE")]
    pub native_language: Option<String>,

    /// Proficiency level (beginner, intermediate, advanced)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<ProficiencyLevel>,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Take the quiz interactively after generation
    #[arg(long)]
    pub quiz: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
