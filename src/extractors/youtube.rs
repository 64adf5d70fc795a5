//! URL shapes recognised for YouTube videos.

/// Marker preceding the id in `youtube.com/watch?v=<id>` URLs
pub const WATCH_MARKER: &str = "watch?v=";

/// Marker preceding the id in `youtu.be/<id>` URLs
pub const SHORT_MARKER: &str = "youtu.be/";

/// Parse `...watch?v=<id>&...` and return the id, cut at the next `&`
/// or at a repeated marker.
pub fn parse_watch_url(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once(WATCH_MARKER)?;
    rest.split(WATCH_MARKER).next()?.split('&').next()
}

/// Parse `...youtu.be/<id>?...` and return the id, cut at the next `?`
/// or at a repeated marker.
pub fn parse_short_url(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once(SHORT_MARKER)?;
    rest.split(SHORT_MARKER).next()?.split('?').next()
}
