//! Console output formatter for study material

use crate::output::formatter::{OutputFormatter, StudyReport};
use colored::Colorize;
use polyglot_domain::{LearningContent, OutputFormat, QuizQuestion};
use serde_json::json;

/// Formats study reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render in the requested format
    pub fn render(report: &StudyReport<'_>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Summary => Self::format_summary_only(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete study report
    pub fn format(report: &StudyReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Polyglot Tube"));
        output.push('\n');
        output.push_str(&Self::video_info(report));

        output.push_str(&Self::section_header("Key Vocabulary"));
        output.push_str(&Self::vocabulary(report.content));

        output.push_str(&Self::section_header("Comprehension Quiz"));
        output.push_str(&Self::quiz(&report.content.quiz));

        output.push_str(&Self::section_header("Video Summary"));
        output.push_str(&format!("\n{}\n", report.content.summary));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &StudyReport<'_>) -> String {
        let value = json!({
            "video": {
                "id": report.video.as_str(),
                "watchUrl": report.video.watch_url(),
                "embedUrl": report.video.embed_url(),
                "thumbnailUrl": report.video.thumbnail_url(),
            },
            "settings": report.settings,
            "content": report.content,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the summary only (concise output)
    pub fn format_summary_only(report: &StudyReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Video Summary ===".cyan().bold()));
        output.push_str(&format!(
            "{} {}\n\n",
            "Video:".dimmed(),
            report.video.watch_url()
        ));
        output.push_str(&report.content.summary);
        output.push('\n');

        output
    }

    /// Format a failed generation
    pub fn format_error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message)
    }

    fn video_info(report: &StudyReport<'_>) -> String {
        let settings = report.settings;
        format!(
            "{} {}\n{} {}\n{} {} → {} ({})\n",
            "Video:".cyan().bold(),
            report.video.watch_url(),
            "Embed:".cyan().bold(),
            report.video.embed_url(),
            "Languages:".cyan().bold(),
            settings.learning_language,
            settings.native_language,
            settings.proficiency,
        )
    }

    fn vocabulary(content: &LearningContent) -> String {
        let mut output = String::new();
        for item in &content.vocabulary {
            output.push_str(&format!(
                "\n{}  {}\n  {}\n",
                item.word.yellow().bold(),
                format!("({})", item.translation).dimmed(),
                item.definition
            ));
        }
        output
    }

    fn quiz(questions: &[QuizQuestion]) -> String {
        let mut output = String::new();
        let mut answers = Vec::with_capacity(questions.len());

        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", i + 1, question.question.bold()));
            for (j, option) in question.options.iter().enumerate() {
                output.push_str(&format!("   {}) {}\n", option_label(j), option));
            }

            let answer = question
                .options
                .iter()
                .position(|o| question.is_correct(o))
                .map(|j| option_label(j).to_string())
                .unwrap_or_else(|| question.correct_answer.clone());
            answers.push(format!("{}-{}", i + 1, answer));
        }

        if !answers.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("Answer key: {}", answers.join(", ")).dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

/// `A`, `B`, `C`, ... for option indices
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &StudyReport<'_>) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &StudyReport<'_>) -> String {
        Self::format_json(report)
    }

    fn format_summary_only(&self, report: &StudyReport<'_>) -> String {
        Self::format_summary_only(report)
    }
}
