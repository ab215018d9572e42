//! Output formatter trait

use polyglot_domain::{LearningContent, LearningSettings, VideoId};

/// Everything needed to render one successful generation
#[derive(Debug, Clone, Copy)]
pub struct StudyReport<'a> {
    pub video: &'a VideoId,
    pub settings: &'a LearningSettings,
    pub content: &'a LearningContent,
}

impl<'a> StudyReport<'a> {
    pub fn new(
        video: &'a VideoId,
        settings: &'a LearningSettings,
        content: &'a LearningContent,
    ) -> Self {
        Self {
            video,
            settings,
            content,
        }
    }
}

/// Trait for formatting study reports
pub trait OutputFormatter {
    /// Format vocabulary, quiz and summary
    fn format(&self, report: &StudyReport<'_>) -> String;

    /// Format as JSON
    fn format_json(&self, report: &StudyReport<'_>) -> String;

    /// Format the summary only (concise output)
    fn format_summary_only(&self, report: &StudyReport<'_>) -> String;
}
