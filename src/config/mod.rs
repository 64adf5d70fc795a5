use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::cli::OutputFormat;
use crate::metadata::youtube::DEFAULT_API_BASE_URL;
use crate::utils::mask_secret;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// YouTube service configuration
    #[serde(default)]
    pub youtube: YoutubeConfig,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeConfig {
    /// Fallback Data API key, used when none is given on the command line
    pub api_key: Option<String>,

    /// Root of the YouTube Data API v3
    pub api_base_url: String,

    /// Caption languages in order of preference
    pub languages: Vec<String>,

    /// Keep HTML formatting tags in caption text
    pub preserve_formatting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default output format
    pub default_output_format: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            languages: vec!["en".to_string()],
            preserve_formatting: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs_err::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = serde_yaml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Write a default config file unless one already exists; returns its path
    pub fn init(path: Option<&Path>) -> Result<(PathBuf, bool)> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            return Ok((config_path, false));
        }

        Self::default().save(&config_path)?;
        Ok((config_path, true))
    }

    /// Get configuration file path
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = path {
            return Ok(path.to_path_buf());
        }

        // Current directory first, for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("yt-transcriber").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let base_url = Url::parse(&self.youtube.api_base_url)
            .with_context(|| {
                format!("Invalid youtube.api_base_url: {}", self.youtube.api_base_url)
            })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("youtube.api_base_url must use HTTP or HTTPS protocol");
        }

        if self.youtube.languages.is_empty() {
            anyhow::bail!("youtube.languages must list at least one language code");
        }

        if OutputFormat::from_name(&self.app.default_output_format).is_none() {
            anyhow::bail!(
                "app.default_output_format must be one of text, json, transcript (got {})",
                self.app.default_output_format
            );
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        match &self.youtube.api_key {
            Some(key) => println!("  API Key: {}", mask_secret(key)),
            None => println!("  API Key: (not set)"),
        }
        println!("  API Base URL: {}", self.youtube.api_base_url);
        println!("  Languages: {}", self.youtube.languages.join(", "));
        println!("  Preserve Formatting: {}", self.youtube.preserve_formatting);
        println!("  Default Format: {}", self.app.default_output_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.yaml"))).unwrap();

        assert_eq!(config.youtube.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.youtube.languages, vec!["en".to_string()]);
        assert!(config.youtube.api_key.is_none());
        assert_eq!(config.app.default_output_format, "text");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs_err::write(&path, "youtube:\n  api_key: abc123\n  languages: [de, en]\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.youtube.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.youtube.languages, vec!["de".to_string(), "en".to_string()]);
        assert_eq!(config.youtube.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.youtube.preserve_formatting);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        fs_err::write(&path, "youtube:\n  api_base_url: ftp://example.com\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());

        fs_err::write(&path, "youtube:\n  languages: []\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());

        fs_err::write(&path, "app:\n  default_output_format: srt\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("app.default_output_format"));

        fs_err::write(&path, "app:\n  default_output_format: JSON\n").unwrap();
        assert!(Config::load(Some(&path)).is_ok());
    }

    #[test]
    fn test_init_writes_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let (written, created) = Config::init(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert!(created);
        assert!(path.exists());

        let (_, created_again) = Config::init(Some(&path)).unwrap();
        assert!(!created_again);

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.youtube.languages, vec!["en".to_string()]);
    }
}
