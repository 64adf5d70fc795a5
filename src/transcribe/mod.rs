use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod youtube;

pub use youtube::YoutubeCaptions;

use crate::extractors::VideoId;
use crate::Result;

/// One timed unit of caption text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Caption text
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// Outcome of a transcript fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Transcript {
    /// Caption text, one fragment per line
    Text(String),

    /// Reason the captions could not be retrieved
    Unavailable(String),
}

impl Transcript {
    pub fn is_available(&self) -> bool {
        matches!(self, Transcript::Text(_))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transcript::Text(text) => f.write_str(text),
            Transcript::Unavailable(reason) => write!(f, "Error fetching transcript: {}", reason),
        }
    }
}

/// Source of caption fragments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptionService: Send + Sync {
    /// Fetch the caption fragments of a video in playback order
    async fn fetch_fragments(&self, video_id: &str) -> Result<Vec<CaptionFragment>>;
}

/// Fetch the full transcript of a video.
///
/// Never fails: any service error is folded into [`Transcript::Unavailable`].
pub async fn fetch_transcript(service: &dyn CaptionService, video_id: &VideoId) -> Transcript {
    match service.fetch_fragments(video_id.as_str()).await {
        Ok(fragments) => {
            tracing::debug!("Received {} caption fragment(s)", fragments.len());
            Transcript::Text(join_fragments(&fragments))
        }
        Err(e) => {
            tracing::warn!("Transcript unavailable for {}: {}", video_id, e);
            Transcript::Unavailable(e.to_string())
        }
    }
}

/// Join fragment texts with newlines, preserving order
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
