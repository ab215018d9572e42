//! Progress notification port
//!
//! Defines the interface for reporting progress while content is generated.

use polyglot_domain::ContentKind;

/// Callback for progress updates during content generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once, before any request is sent
    fn on_generation_start(&self, total_requests: usize);

    /// Called when one request settles
    fn on_request_complete(&self, kind: ContentKind, success: bool);

    /// Called once the aggregate outcome is known
    fn on_generation_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_generation_start(&self, _total_requests: usize) {}
    fn on_request_complete(&self, _kind: ContentKind, _success: bool) {}
}
