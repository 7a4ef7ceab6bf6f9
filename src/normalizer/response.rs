//! Response shapes returned to API clients
//!
//! All optional fields are skipped when absent, so the JSON is sparse.
//! Lists and counts are always emitted, even when empty or zero.

use crate::extractor::models::{Format, Thumbnail, VideoInfo};
use serde::Serialize;
use serde_json::Number;

/// One deliverable encoding of the video
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormatDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcodec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acodec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_note: Option<String>,
}

/// Adaptive (HLS) delivery of one format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamingVariant {
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThumbnailDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// Normalized metadata for a single video
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    pub thumbnails: Vec<ThumbnailDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage_url: Option<String>,
    pub original_url: String,
    pub formats: Vec<FormatDescriptor>,
    pub hls_streams: Vec<StreamingVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_video_url: Option<String>,
    pub format_count: usize,
}

/// Classified extraction error, serialized as `{"error", "message"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionFailure {
    #[serde(rename = "error")]
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    #[serde(rename = "Video unavailable")]
    VideoUnavailable,
    #[serde(rename = "Private video")]
    PrivateVideo,
    #[serde(rename = "Video removed")]
    VideoRemoved,
    #[serde(rename = "Download error")]
    DownloadError,
    #[serde(rename = "Extraction failed")]
    ExtractionFailed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::VideoUnavailable => "Video unavailable",
            FailureKind::PrivateVideo => "Private video",
            FailureKind::VideoRemoved => "Video removed",
            FailureKind::DownloadError => "Download error",
            FailureKind::ExtractionFailed => "Extraction failed",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Format> for FormatDescriptor {
    fn from(fmt: &Format) -> Self {
        Self {
            format_id: fmt.format_id.clone(),
            ext: fmt.ext.clone(),
            resolution: fmt.resolution.clone(),
            fps: fmt.fps.clone(),
            vcodec: fmt.vcodec.clone(),
            acodec: fmt.acodec.clone(),
            filesize: fmt.filesize,
            url: fmt.url.clone(),
            quality: fmt.quality.clone(),
            format_note: fmt.format_note.clone(),
        }
    }
}

impl From<&Format> for StreamingVariant {
    fn from(fmt: &Format) -> Self {
        Self {
            quality: fmt
                .format_note
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            url: fmt.url.clone(),
            resolution: fmt.resolution.clone(),
        }
    }
}

impl From<&Thumbnail> for ThumbnailDescriptor {
    fn from(thumb: &Thumbnail) -> Self {
        Self {
            url: thumb.url.clone(),
            width: thumb.width,
            height: thumb.height,
            resolution: thumb.resolution.clone(),
        }
    }
}

impl ExtractionResult {
    /// Reshape a provider record for the URL the client asked about
    pub fn from_info(info: VideoInfo, original_url: &str, video_id: Option<String>) -> Self {
        let raw_formats = info.formats.unwrap_or_default();

        let formats: Vec<FormatDescriptor> = raw_formats.iter().map(FormatDescriptor::from).collect();
        let hls_streams = raw_formats
            .iter()
            .filter(|fmt| fmt.is_segmented())
            .map(StreamingVariant::from)
            .collect();
        let thumbnails = info
            .thumbnails
            .unwrap_or_default()
            .iter()
            .map(ThumbnailDescriptor::from)
            .collect();

        Self {
            success: true,
            video_id,
            title: info.title,
            description: info.description,
            duration: info.duration,
            duration_string: info.duration_string,
            upload_date: info.upload_date,
            uploader: info.uploader,
            uploader_id: info.uploader_id,
            view_count: info.view_count,
            like_count: info.like_count,
            thumbnails,
            webpage_url: info.webpage_url,
            original_url: original_url.to_string(),
            format_count: formats.len(),
            formats,
            hls_streams,
            best_video_url: info.url,
        }
    }
}
