//! Prompt templates for content generation
//!
//! Each template embeds the expected output schema and asks for minified JSON
//! with no surrounding prose, which is what the response parser expects.

use crate::learning::entities::{ContentKind, QUIZ_OPTIONS, QUIZ_SIZE, VOCABULARY_SIZE};
use crate::learning::settings::LearningSettings;

/// Templates for generating instructions for each content request
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction for the given request kind
    pub fn for_kind(kind: ContentKind, settings: &LearningSettings) -> String {
        match kind {
            ContentKind::Vocabulary => Self::vocabulary(settings),
            ContentKind::Quiz => Self::quiz(settings),
            ContentKind::Summary => Self::summary(settings),
        }
    }

    /// Vocabulary: key words with definition and translation
    pub fn vocabulary(settings: &LearningSettings) -> String {
        let level = settings.proficiency;
        let learning = &settings.learning_language;
        format!(
            r#"You are a language learning assistant. Your task is to analyze the content of the provided YouTube video. Identify {count} key vocabulary words or phrases for a {level} student learning {learning}.
For each item, provide the word in {learning}, its definition in {learning} (simplified for a {level} learner), and its translation in {native}.

Format your entire response as a single, minified JSON array, and nothing else. The JSON must follow this schema:
[{{"word": "...", "definition": "...", "translation": "..."}}, ...].
Do not include any introductory text, closing text, or markdown formatting."#,
            count = VOCABULARY_SIZE,
            native = settings.native_language,
        )
    }

    /// Quiz: multiple-choice comprehension questions
    pub fn quiz(settings: &LearningSettings) -> String {
        format!(
            r#"You are an expert language teacher. Your task is to analyze the content of the provided YouTube video. Create a multiple-choice quiz in {learning} with {count} questions to test a {level} learner's comprehension.
Each question must have exactly {options} options, with only one being correct. The questions should focus on the main ideas and details of the video.

Format your entire response as a single, minified JSON array, and nothing else. The JSON must follow this schema:
[{{"question": "...", "options": ["...", "...", "...", "..."], "correctAnswer": "..."}}, ...].
The 'correctAnswer' must exactly match one of the items in the 'options' array.
Do not include any introductory text, closing text, or markdown formatting."#,
            learning = settings.learning_language,
            count = QUIZ_SIZE,
            level = settings.proficiency,
            options = QUIZ_OPTIONS,
        )
    }

    /// Summary: a short paragraph in the learning language
    pub fn summary(settings: &LearningSettings) -> String {
        format!(
            r#"You are a helpful assistant. Analyze the provided YouTube video and provide a concise summary (about 3-4 sentences) in {learning}. The summary should be written in simple language suitable for a {level} language learner.

Format your entire response as a single, minified JSON object, and nothing else, following this schema:
{{"summary": "..."}}.
Do not include any introductory text, closing text, or markdown formatting."#,
            learning = settings.learning_language,
            level = settings.proficiency,
        )
    }
}
