//! Video identifier extraction.
//!
//! Supported URL shapes (scheme, `www.` and `m.` are optional):
//!
//! | Shape | Example |
//! |-------|---------|
//! | Watch URL | `youtube.com/watch?v=dQw4w9WgXcQ&t=10s` |
//! | Short host | `youtu.be/dQw4w9WgXcQ` |
//! | Embed / legacy | `youtube.com/embed/dQw4w9WgXcQ`, `youtube.com/v/…`, `youtube.com/e/…` |
//! | Shorts / live | `youtube.com/shorts/…`, `youtube.com/live/…` |
//! | Channel paths | `youtube.com/user/name/dQw4w9WgXcQ` |

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Length of a canonical video identifier.
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?|shorts|live)/|\S*?[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    )
    .expect("video URL pattern is valid")
});

/// Canonical 11-character video identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Validate a bare identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if Self::is_valid(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::InvalidVideoId(id))
        }
    }

    /// Extract the identifier from a free-form URL.
    pub fn from_url(url: &str) -> Result<Self, DomainError> {
        extract_video_id(url).ok_or_else(|| DomainError::InvalidVideoUrl(url.to_string()))
    }

    fn is_valid(id: &str) -> bool {
        id.len() == VIDEO_ID_LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Extract a video identifier from a URL, or `None` if no supported shape matches.
///
/// Never returns a truncated identifier: a run of 12 or more identifier
/// characters where 11 are expected is a failure.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}
