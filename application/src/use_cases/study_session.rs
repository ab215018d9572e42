//! Study session
//!
//! The state container owned by the top-level component. It captures the
//! learner's settings at submit time, validates the URL, drives
//! [`AppState`] and runs [`GenerateContentUseCase`].
//!
//! Resubmitting while a request is loading is refused with
//! [`SubmitError::Busy`]; the earlier request is neither cancelled nor raced.

use super::generate_content::{GenerateContentError, GenerateContentInput, GenerateContentUseCase};
use crate::ports::content_generator::ContentGenerator;
use crate::ports::progress::ProgressNotifier;
use polyglot_domain::{AppState, LearningContent, LearningSettings, StateEvent, VideoId};
use thiserror::Error;
use tracing::{error, info, warn};

/// Progress message shown while content is generated
pub const LOADING_MESSAGE: &str = "Analyzing video and generating learning materials...";

/// Error message for a URL with no recognizable video identifier
pub const INVALID_URL_MESSAGE: &str = "Invalid YouTube URL. Please try again.";

/// Prefix for generation failures shown to the learner
pub const FAILURE_PREFIX: &str = "Failed to process video.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A video is already being processed")]
    Busy,

    #[error("Invalid YouTube URL. Please try again.")]
    InvalidUrl(String),
}

/// A submission that has entered the loading state and awaits generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub video: VideoId,
    pub input: GenerateContentInput,
}

/// Owns the application state for one learner.
pub struct StudySession<G: ContentGenerator + 'static> {
    use_case: GenerateContentUseCase<G>,
    state: AppState,
    settings: LearningSettings,
    video: Option<VideoId>,
}

impl<G: ContentGenerator + 'static> StudySession<G> {
    pub fn new(use_case: GenerateContentUseCase<G>, settings: LearningSettings) -> Self {
        Self {
            use_case,
            state: AppState::default(),
            settings,
            video: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &LearningSettings {
        &self.settings
    }

    /// Replace the settings. Only the next submission sees the change.
    pub fn set_settings(&mut self, settings: LearningSettings) {
        self.settings = settings;
    }

    /// The video of the current or last accepted submission
    pub fn video(&self) -> Option<&VideoId> {
        self.video.as_ref()
    }

    /// A handle to the use case, for running a [`PendingRequest`] without
    /// borrowing the session.
    pub fn use_case(&self) -> GenerateContentUseCase<G> {
        self.use_case.clone()
    }

    /// Validate `url` and enter the loading state.
    ///
    /// An invalid URL moves straight to the error state and no request is
    /// produced.
    pub fn begin(&mut self, url: &str) -> Result<PendingRequest, SubmitError> {
        if self.state.is_loading() {
            warn!("Submission ignored: a request is already loading");
            return Err(SubmitError::Busy);
        }

        let video = match VideoId::from_url(url) {
            Ok(video) => video,
            Err(e) => {
                info!("Rejected submission: {}", e);
                self.video = None;
                self.transition(StateEvent::Reject(INVALID_URL_MESSAGE.to_string()));
                return Err(SubmitError::InvalidUrl(url.to_string()));
            }
        };

        self.transition(StateEvent::Submit(LOADING_MESSAGE.to_string()));
        self.video = Some(video.clone());

        Ok(PendingRequest {
            video,
            input: GenerateContentInput::new(url, self.settings.clone()),
        })
    }

    /// Settle the loading state with the generation outcome.
    pub fn finish(
        &mut self,
        result: Result<LearningContent, GenerateContentError>,
    ) -> &AppState {
        let event = match result {
            Ok(content) => StateEvent::Resolve(content),
            Err(e) => {
                error!("Error processing video: {}", e);
                StateEvent::Reject(format!("{} {}", FAILURE_PREFIX, e))
            }
        };
        self.transition(event);
        &self.state
    }

    /// Validate, generate and settle in one call.
    ///
    /// Returns the resulting state, including the error state for an invalid
    /// URL. Only [`SubmitError::Busy`] is returned as an error.
    pub async fn submit(
        &mut self,
        url: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<&AppState, SubmitError> {
        let pending = match self.begin(url) {
            Ok(pending) => pending,
            Err(SubmitError::InvalidUrl(_)) => return Ok(&self.state),
            Err(e) => return Err(e),
        };

        let result = self
            .use_case
            .execute_with_progress(pending.input, progress)
            .await;
        Ok(self.finish(result))
    }

    fn transition(&mut self, event: StateEvent) {
        if let Err(e) = self.state.apply(event) {
            warn!("Ignored state transition: {}", e);
        }
    }
}
