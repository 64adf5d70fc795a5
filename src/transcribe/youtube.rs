use anyhow::Context;
use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use super::{CaptionFragment, CaptionService};
use crate::Result;

/// Caption service backed by YouTube's public transcript endpoints
pub struct YoutubeCaptions {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeCaptions {
    /// Create a caption client asking for `languages` in order of preference
    pub fn new(languages: Vec<String>, preserve_formatting: bool) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .context("Failed to create YouTube transcript client")?;

        Ok(Self {
            api,
            languages,
            preserve_formatting,
        })
    }
}

#[async_trait]
impl CaptionService for YoutubeCaptions {
    async fn fetch_fragments(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        tracing::debug!("Fetching captions for {} (languages: {:?})", video_id, languages);

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| CaptionFragment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}
