//! CLI entrypoint for Polyglot Tube
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use polyglot_application::{
    BehaviorConfig, GenerateContentUseCase, NoProgress, ProgressNotifier, StudySession,
};
use polyglot_domain::AppState;
use polyglot_infrastructure::{ConfigLoader, FileConfig, GeminiContentGenerator};
use polyglot_presentation::{
    Cli, ConsoleFormatter, InteractiveQuiz, OutputConfig, ProgressReporter, SimpleProgress,
    StudyReport,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout is reserved for the rendered material
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Polyglot Tube");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig::resolve(&cli, config.output.format, config.output.color);
    output.apply_color();

    let settings = config.learning_settings()?;
    let Some(api_key) = config.resolve_api_key() else {
        bail!("No API key found. Set GEMINI_API_KEY or add api_key under [gemini] in the config.");
    };

    // === Dependency Injection ===
    let generator = Arc::new(GeminiContentGenerator::new(config.gemini_config(api_key))?);
    let use_case = GenerateContentUseCase::new(generator).with_behavior(
        BehaviorConfig::from_timeout_seconds(config.behavior.timeout_seconds),
    );
    let mut session = StudySession::new(use_case, settings);

    let url = cli.url.as_deref().context("A YouTube URL is required")?;

    let progress: Box<dyn ProgressNotifier> = if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    session.submit(url, progress.as_ref()).await?;

    match session.state() {
        AppState::Success { content } => {
            let video = session
                .video()
                .context("Generated content without a video")?;
            let report = StudyReport::new(video, session.settings(), content);
            println!("{}", ConsoleFormatter::render(&report, output.format));

            if cli.quiz
                && let Some(score) =
                    InteractiveQuiz::terminal(output.prompts_on_stderr()).run(&content.quiz)?
            {
                info!("Quiz finished with {}", score);
            }
            Ok(())
        }
        AppState::Error { message } => {
            eprint!("{}", ConsoleFormatter::format_error(message));
            std::process::exit(1);
        }
        other => {
            warn!("Session ended in {} state", other.status().as_str());
            bail!("Generation did not complete")
        }
    }
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(language) = &cli.learning_language {
        config.learning.learning_language = language.clone();
    }
    if let Some(language) = &cli.native_language {
        config.learning.native_language = language.clone();
    }
    if let Some(level) = cli.level {
        config.learning.level = level;
    }
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.behavior.timeout_seconds = Some(timeout);
    }
}
