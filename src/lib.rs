//! YT Transcriber - A Rust CLI tool for fetching YouTube video details and transcripts
//!
//! This library parses YouTube video URLs, looks up the video's snippet through the
//! YouTube Data API and retrieves the caption transcript for the same video.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use extractors::{extract_video_id, VideoId};
pub use metadata::{MetadataService, VideoDetails, YoutubeDataApi};
pub use pipeline::{TranscriptionPipeline, TranscriptionResult};
pub use transcribe::{CaptionService, Transcript, YoutubeCaptions};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the transcriber
#[derive(thiserror::Error, Debug)]
pub enum TranscriberError {
    #[error("Please provide both API Key and Video URL.")]
    MissingInput,

    #[error("Invalid YouTube URL.")]
    InvalidUrl(String),

    #[error("Unable to fetch video details. Check API Key and URL.")]
    VideoNotFound(String),

    #[error("Unable to fetch video details. Check API Key and URL.")]
    MetadataRequest(String),
}
