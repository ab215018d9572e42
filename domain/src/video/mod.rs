//! Video domain
//!
//! The video a learner studies is referenced by the URL they paste. The
//! canonical identifier is extracted locally for display; the original URL is
//! what gets handed to the model.

pub mod identifier;

pub use identifier::{VideoId, extract_video_id};
