//! Video identifiers derived from platform URLs

use url::Url;

/// Host substrings that mark a URL as belonging to the platform
pub const PLATFORM_HOST_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Cheap pre-check applied to raw request input before any parsing
pub fn has_platform_marker(url: &str) -> bool {
    PLATFORM_HOST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Derive the video id from a watch URL or a short link.
///
/// Never fails: unparseable URLs and unknown shapes yield `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtube.com") {
        if !parsed.path().contains("watch") {
            return None;
        }
        return parsed
            .query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned());
    }

    if host.contains("youtu.be") {
        let id = parsed.path().trim_start_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }

    None
}
