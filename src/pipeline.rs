use anyhow::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::extractors::{extract_video_id, VideoId};
use crate::metadata::{fetch_video_details, MetadataService, VideoDetails, YoutubeDataApi};
use crate::transcribe::{fetch_transcript, CaptionService, Transcript, YoutubeCaptions};
use crate::TranscriberError;

/// Everything gathered for one video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// URL as given by the user
    pub url: String,

    /// Identifier extracted from the URL
    pub video_id: VideoId,

    /// Title, description and related snippet fields
    pub details: VideoDetails,

    /// Caption transcript, or why it is missing
    pub transcript: Transcript,

    /// Timestamp when both lookups completed
    pub fetched_at: DateTime<Utc>,
}

/// Sequences URL parsing, the metadata lookup and the transcript fetch
pub struct TranscriptionPipeline {
    metadata: Box<dyn MetadataService>,
    captions: Box<dyn CaptionService>,
    show_progress: bool,
}

impl TranscriptionPipeline {
    pub fn new(metadata: Box<dyn MetadataService>, captions: Box<dyn CaptionService>) -> Self {
        Self {
            metadata,
            captions,
            show_progress: true,
        }
    }

    /// Build a pipeline talking to the real YouTube services.
    ///
    /// `languages` overrides the configured caption language preference.
    pub fn from_config(config: &Config, languages: Option<Vec<String>>) -> Result<Self> {
        let metadata = YoutubeDataApi::new(&config.youtube.api_base_url)?;
        let captions = YoutubeCaptions::new(
            languages.unwrap_or_else(|| config.youtube.languages.clone()),
            config.youtube.preserve_formatting,
        )?;

        Ok(Self::new(Box::new(metadata), Box::new(captions)))
    }

    /// Enable or disable the progress spinners
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch details and transcript for the video at `url`.
    ///
    /// Input is validated before any network call. The transcript is only
    /// requested once the video details are known.
    pub async fn run(
        &self,
        api_key: Option<&str>,
        url: Option<&str>,
    ) -> std::result::Result<TranscriptionResult, TranscriberError> {
        let (api_key, url) = match (non_blank(api_key), non_blank(url)) {
            (Some(api_key), Some(url)) => (api_key, url),
            _ => return Err(TranscriberError::MissingInput),
        };

        let video_id = extract_video_id(url)
            .ok_or_else(|| TranscriberError::InvalidUrl(url.to_string()))?;

        tracing::info!("Starting transcription for video: {}", video_id);

        let progress = self.spinner("Fetching video details...");
        let details = match fetch_video_details(self.metadata.as_ref(), api_key, &video_id).await {
            Ok(Some(details)) => details,
            Ok(None) => {
                progress.abandon_with_message("Video not found");
                tracing::warn!("Metadata service returned no items for {}", video_id);
                return Err(TranscriberError::VideoNotFound(video_id.to_string()));
            }
            Err(e) => {
                progress.abandon_with_message("Video details request failed");
                tracing::warn!("Metadata request for {} failed: {:#}", video_id, e);
                return Err(TranscriberError::MetadataRequest(format!("{:#}", e)));
            }
        };
        progress.finish_with_message("Video details fetched successfully!");

        let progress = self.spinner("Fetching transcript...");
        let transcript = fetch_transcript(self.captions.as_ref(), &video_id).await;
        if transcript.is_available() {
            progress.finish_with_message("Transcript fetched successfully!");
        } else {
            progress.abandon_with_message("Transcript unavailable");
        }

        Ok(TranscriptionResult {
            url: url.to_string(),
            video_id,
            details,
            transcript,
            fetched_at: Utc::now(),
        })
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.set_message(message);
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
