use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod youtube;

pub use youtube::YoutubeDataApi;

use crate::extractors::VideoId;
use crate::Result;

/// Snippet of a video as returned by the metadata service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    /// Video title
    pub title: String,

    /// Video description, possibly empty
    #[serde(default)]
    pub description: String,

    /// Name of the uploading channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,

    /// RFC 3339 publication timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Source of video snippets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataService: Send + Sync {
    /// List the snippets matching a video id, in service order.
    ///
    /// An empty list means the video does not exist or is not accessible
    /// with the given key. Transport, auth and quota failures are errors.
    async fn list_snippets(&self, api_key: &str, video_id: &str) -> Result<Vec<VideoDetails>>;
}

/// Fetch title and description for a video.
///
/// Returns `Ok(None)` when the service knows no such video.
pub async fn fetch_video_details(
    service: &dyn MetadataService,
    api_key: &str,
    video_id: &VideoId,
) -> Result<Option<VideoDetails>> {
    tracing::debug!("Requesting snippet for video: {}", video_id);

    let items = service.list_snippets(api_key, video_id.as_str()).await?;

    tracing::debug!("Metadata service returned {} item(s)", items.len());
    Ok(items.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn details(title: &str, description: &str) -> VideoDetails {
        VideoDetails {
            title: title.to_string(),
            description: description.to_string(),
            channel_title: None,
            published_at: None,
        }
    }

    #[tokio::test]
    async fn test_returns_first_item_untouched() {
        let mut service = MockMetadataService::new();
        service
            .expect_list_snippets()
            .with(eq("secret"), eq("XYZ"))
            .times(1)
            .returning(|_, _| Ok(vec![details("T", "D"), details("other", "ignored")]));

        let result = fetch_video_details(&service, "secret", &VideoId::new("XYZ"))
            .await
            .unwrap();

        assert_eq!(result, Some(details("T", "D")));
    }

    #[tokio::test]
    async fn test_empty_title_is_still_found() {
        let mut service = MockMetadataService::new();
        service
            .expect_list_snippets()
            .times(1)
            .returning(|_, _| Ok(vec![details("", "")]));

        let result = fetch_video_details(&service, "secret", &VideoId::new("XYZ"))
            .await
            .unwrap();

        assert_eq!(result, Some(details("", "")));
    }

    #[tokio::test]
    async fn test_zero_items_is_absent() {
        let mut service = MockMetadataService::new();
        service
            .expect_list_snippets()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let result = fetch_video_details(&service, "secret", &VideoId::new("gone"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut service = MockMetadataService::new();
        service
            .expect_list_snippets()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("quota exceeded")));

        let result = tokio_test::block_on(fetch_video_details(
            &service,
            "secret",
            &VideoId::new("XYZ"),
        ));

        assert_eq!(result.unwrap_err().to_string(), "quota exceeded");
    }
}
