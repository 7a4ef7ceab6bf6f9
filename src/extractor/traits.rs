use crate::extractor::models::VideoInfo;
use crate::utils::error::ExtractorError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Desktop Chrome user agent sent to the platform
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Best available format, preferring an mp4 container
pub const DEFAULT_FORMAT_SELECTOR: &str = "best[ext=mp4]/best";

/// Options handed to the provider on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Format selector expression
    pub format: String,
    /// Extra HTTP headers as (name, value) pairs
    pub http_headers: Vec<(String, String)>,
    /// Netscape cookie file, when credentials are configured
    pub cookie_file: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT_SELECTOR.to_string(),
            http_headers: vec![("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())],
            cookie_file: None,
        }
    }
}

/// Core trait for video info providers
///
/// This trait isolates the service from the specific extraction method
/// (yt-dlp subprocess, test doubles, ...).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "ytdlp")
    fn id(&self) -> &'static str;

    /// Resolves metadata and direct URLs for `url` without downloading media
    async fn extract_info(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<VideoInfo, ExtractorError>;
}
