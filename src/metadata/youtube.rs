use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use super::{MetadataService, VideoDetails};
use crate::Result;

/// Header carrying the Data API key, kept out of the request URL
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Default endpoint root of the YouTube Data API v3
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Response of `videos.list`
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoDetails,
}

/// Google API error document
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// YouTube Data API v3 client for video snippets
pub struct YoutubeDataApi {
    client: Client,
    base_url: Url,
}

impl YoutubeDataApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid YouTube Data API base URL: {}", base_url))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Build the `videos` endpoint under the configured base URL
    fn videos_endpoint(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                anyhow::anyhow!("YouTube Data API base URL cannot hold a path: {}", self.base_url)
            })?
            .pop_if_empty()
            .push("videos");
        Ok(url)
    }
}

#[async_trait]
impl MetadataService for YoutubeDataApi {
    async fn list_snippets(&self, api_key: &str, video_id: &str) -> Result<Vec<VideoDetails>> {
        let endpoint = self.videos_endpoint()?;

        tracing::debug!("GET {} (part=snippet, id={})", endpoint, video_id);

        let response = self
            .client
            .get(endpoint)
            .header(API_KEY_HEADER, api_key)
            .query(&[("part", "snippet"), ("id", video_id)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach the YouTube Data API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read the YouTube Data API response")?;

        parse_video_list(status, &body)
    }
}

/// Decode a `videos.list` response body
fn parse_video_list(status: StatusCode, body: &str) -> Result<Vec<VideoDetails>> {
    if !status.is_success() {
        if let Ok(ErrorResponse { error }) = serde_json::from_str::<ErrorResponse>(body) {
            anyhow::bail!("YouTube Data API error {}: {}", error.code, error.message);
        }
        anyhow::bail!("YouTube Data API request failed: HTTP {}", status);
    }

    let list: VideoListResponse =
        serde_json::from_str(body).context("Failed to parse YouTube Data API response")?;

    Ok(list.items.into_iter().map(|item| item.snippet).collect())
}
