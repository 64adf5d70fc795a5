use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "transcriber",
    about = "YT Transcriber - Fetch YouTube video details and caption transcripts",
    version,
    long_about = "A CLI tool that looks up a YouTube video's title and description through the YouTube Data API and retrieves its caption transcript."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to ./config.yaml, then the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch title, description and transcript of a video
    Transcribe {
        /// YouTube video URL (youtube.com/watch?v=... or youtu.be/...)
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// YouTube Data API key (prompted for when omitted on a terminal)
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, value_name = "KEY")]
        api_key: Option<String>,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Caption language, repeat in order of preference (overrides the config)
        #[arg(short, long = "language", value_name = "LANG")]
        languages: Vec<String>,
    },

    /// Print the video id extracted from a URL
    Id {
        /// YouTube video URL
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Show or initialize the configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Title, description and transcript
    Text,
    /// JSON document with all fetched fields
    Json,
    /// Transcript text only
    Transcript,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Transcript => write!(f, "transcript"),
        }
    }
}

impl OutputFormat {
    /// Parse a format name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
