//! Generate Content use case
//!
//! Requests vocabulary, quiz and summary for one video concurrently and
//! merges them into a single [`LearningContent`].
//!
//! Aggregation is all-or-nothing: the first request to fail (at the transport
//! or while parsing) decides the error, the remaining requests are aborted,
//! and no partial content is returned.

use crate::config::BehaviorConfig;
use crate::ports::content_generator::{
    ContentGenerator, ContentRequest, GatewayError, MediaReference,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use polyglot_domain::{
    ContentKind, LearningContent, LearningSettings, ParseError, PromptTemplate, QuizQuestion,
    VocabularyItem, parse_quiz, parse_summary, parse_vocabulary, truncate, validate_content,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Maximum bytes of raw model output written to the log on a format error
const RAW_PREVIEW_LEN: usize = 2000;

/// Errors that can occur while generating content
///
/// `Display` forwards the underlying message verbatim.
#[derive(Error, Debug)]
pub enum GenerateContentError {
    #[error("{source}")]
    Gateway {
        kind: ContentKind,
        #[source]
        source: GatewayError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Content generation task failed: {0}")]
    TaskFailed(String),
}

impl GenerateContentError {
    /// Which request failed, when known
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            GenerateContentError::Gateway { kind, .. } => Some(*kind),
            GenerateContentError::Parse(e) => Some(e.kind()),
            GenerateContentError::TaskFailed(_) => None,
        }
    }
}

/// Input for the GenerateContent use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateContentInput {
    /// The URL exactly as the learner submitted it
    pub video_url: String,
    /// Settings captured at submit time
    pub settings: LearningSettings,
}

impl GenerateContentInput {
    pub fn new(video_url: impl Into<String>, settings: LearningSettings) -> Self {
        Self {
            video_url: video_url.into(),
            settings,
        }
    }
}

/// One parsed part of the aggregate
enum GeneratedPart {
    Vocabulary(Vec<VocabularyItem>),
    Quiz(Vec<QuizQuestion>),
    Summary(String),
}

/// Use case for generating learning content
pub struct GenerateContentUseCase<G: ContentGenerator + 'static> {
    generator: Arc<G>,
    behavior: BehaviorConfig,
}

impl<G: ContentGenerator + 'static> Clone for GenerateContentUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            behavior: self.behavior.clone(),
        }
    }
}

impl<G: ContentGenerator + 'static> GenerateContentUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateContentInput,
    ) -> Result<LearningContent, GenerateContentError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateContentInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<LearningContent, GenerateContentError> {
        let kinds = ContentKind::all();
        info!(
            "Generating content for {} with {} ({} -> {}, {})",
            input.video_url,
            self.generator.model_name(),
            input.settings.learning_language,
            input.settings.native_language,
            input.settings.proficiency
        );
        progress.on_generation_start(kinds.len());

        let result = self.generate_all(&input, &kinds, progress).await;
        progress.on_generation_complete(result.is_ok());

        let content = result?;
        for issue in validate_content(&content) {
            warn!("Generated content issue: {}", issue.message);
        }
        info!(
            "Content generated: {} words, {} questions",
            content.vocabulary.len(),
            content.quiz.len()
        );
        Ok(content)
    }

    /// Fire all requests together; return on the first failure or once all succeed
    async fn generate_all(
        &self,
        input: &GenerateContentInput,
        kinds: &[ContentKind],
        progress: &dyn ProgressNotifier,
    ) -> Result<LearningContent, GenerateContentError> {
        let mut join_set = JoinSet::new();

        for &kind in kinds {
            let generator = Arc::clone(&self.generator);
            let request = ContentRequest::new(
                kind,
                PromptTemplate::for_kind(kind, &input.settings),
                MediaReference::video(input.video_url.clone()),
            );
            let timeout = self.behavior.timeout;

            join_set.spawn(async move {
                let result = Self::request_part(&generator, &request, timeout).await;
                (kind, result)
            });
        }

        let mut vocabulary = None;
        let mut quiz = None;
        let mut summary = None;

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((kind, Ok(part))) => {
                    debug!("{} request succeeded", kind);
                    progress.on_request_complete(kind, true);
                    match part {
                        GeneratedPart::Vocabulary(v) => vocabulary = Some(v),
                        GeneratedPart::Quiz(q) => quiz = Some(q),
                        GeneratedPart::Summary(s) => summary = Some(s),
                    }
                }
                Ok((kind, Err(e))) => {
                    warn!("{} request failed: {}", kind, e);
                    progress.on_request_complete(kind, false);
                    join_set.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    join_set.abort_all();
                    return Err(GenerateContentError::TaskFailed(e.to_string()));
                }
            }
        }

        match (vocabulary, quiz, summary) {
            (Some(vocabulary), Some(quiz), Some(summary)) => {
                Ok(LearningContent::new(vocabulary, quiz, summary))
            }
            _ => Err(GenerateContentError::TaskFailed(
                "not every request produced a result".to_string(),
            )),
        }
    }

    /// Send one request and parse its response
    async fn request_part(
        generator: &G,
        request: &ContentRequest,
        timeout: Option<Duration>,
    ) -> Result<GeneratedPart, GenerateContentError> {
        let kind = request.kind;
        let call = generator.generate(request);
        let sent = match timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => call.await,
        };
        let raw = sent.map_err(|source| GenerateContentError::Gateway { kind, source })?;
        debug!("{} response: {} bytes", kind, raw.len());

        let parsed = match kind {
            ContentKind::Vocabulary => parse_vocabulary(&raw).map(GeneratedPart::Vocabulary),
            ContentKind::Quiz => parse_quiz(&raw).map(GeneratedPart::Quiz),
            ContentKind::Summary => parse_summary(&raw).map(GeneratedPart::Summary),
        };

        parsed.map_err(|e| {
            let ParseError::UnexpectedFormat { source, raw, .. } = &e;
            error!(
                "Failed to parse {} response: {}. Raw response: {}",
                kind,
                source,
                truncate(raw, RAW_PREVIEW_LEN)
            );
            GenerateContentError::Parse(e)
        })
    }
}
