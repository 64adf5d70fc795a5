use serde::{Deserialize, Serialize};
use std::fmt;

pub mod youtube;

/// Opaque YouTube video identifier taken from a video URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the video identifier from a YouTube URL.
///
/// Returns `None` when the URL matches none of the supported shapes; callers
/// treat that as invalid user input.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    youtube::parse_watch_url(url)
        .or_else(|| youtube::parse_short_url(url))
        .filter(|id| !id.is_empty())
        .map(VideoId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id, Some(VideoId::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn test_extract_from_watch_url_with_extra_params() {
        let id = extract_video_id("https://www.youtube.com/watch?v=XYZ&t=42s&list=PL1");
        assert_eq!(id.as_ref().map(VideoId::as_str), Some("XYZ"));
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/XYZ").map(|id| id.to_string()),
            Some("XYZ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/XYZ?si=abc&t=10").map(|id| id.to_string()),
            Some("XYZ".to_string())
        );
    }

    #[test]
    fn test_watch_marker_takes_precedence() {
        // Both markers present: the query-parameter form wins.
        let id = extract_video_id("https://youtu.be/AAA?redirect=watch?v=BBB");
        assert_eq!(id, Some(VideoId::new("BBB")));
    }

    #[test]
    fn test_unrecognized_urls() {
        assert_eq!(extract_video_id("https://example.com/foo"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/channel/UC123"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_empty_identifier_is_absent() {
        assert_eq!(extract_video_id("https://youtu.be/"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=&t=1"), None);
    }

    #[test]
    fn test_identifier_is_not_validated() {
        // Whatever follows the marker is passed through untouched.
        let id = extract_video_id("https://youtu.be/not a real id!");
        assert_eq!(id, Some(VideoId::new("not a real id!")));
    }
}
