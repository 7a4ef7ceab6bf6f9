//! Raw records produced by the extraction provider
//!
//! These mirror the JSON document `yt-dlp -J` prints. Everything is optional
//! because the provider omits or nulls fields freely depending on the site and
//! the format.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Video information as reported by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<Number>,
    pub duration_string: Option<String>,
    pub upload_date: Option<String>,
    pub uploader: Option<String>,
    pub uploader_id: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    #[serde(default)]
    pub thumbnails: Option<Vec<Thumbnail>>,
    pub webpage_url: Option<String>,
    /// Direct URL of the format picked by the format selector
    pub url: Option<String>,
    #[serde(default)]
    pub formats: Option<Vec<Format>>,
}

/// Video format information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub resolution: Option<String>,
    pub fps: Option<Number>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub filesize: Option<u64>,
    pub url: Option<String>,
    pub quality: Option<Number>,
    pub format_note: Option<String>,
    /// Transport marker, e.g. `https`, `m3u8_native`, `http_dash_segments`
    pub protocol: Option<String>,
}

/// Thumbnail entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resolution: Option<String>,
}

impl Format {
    /// Protocols that deliver the media as manifest-described chunks
    pub const SEGMENTED_PROTOCOLS: [&'static str; 2] = ["m3u8_native", "m3u8"];

    pub fn is_segmented(&self) -> bool {
        self.protocol
            .as_deref()
            .is_some_and(|p| Self::SEGMENTED_PROTOCOLS.contains(&p))
    }
}
