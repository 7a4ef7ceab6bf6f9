use crate::extractor::traits::{ExtractOptions, Extractor};
use crate::normalizer::classify::{classify, extraction_failed};
use crate::normalizer::response::{ExtractionFailure, ExtractionResult};
use crate::normalizer::video_id::extract_video_id;
use crate::utils::config::ServerSettings;
use crate::utils::cookies::CookieFile;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// How the provider gets its cookie file
#[derive(Debug, Clone)]
pub enum CookiePolicy {
    /// Path resolved once at startup (`None` when no cookies are configured)
    Fixed(Option<PathBuf>),
    /// Re-materialize from the environment before each call
    RefreshPerRequest(CookieFile),
}

/// Turns platform URLs into normalized results or classified failures
pub struct VideoService {
    extractor: Arc<dyn Extractor>,
    settings: ServerSettings,
    cookies: CookiePolicy,
}

impl VideoService {
    pub fn new(extractor: Arc<dyn Extractor>, settings: ServerSettings, cookies: CookiePolicy) -> Self {
        Self {
            extractor,
            settings,
            cookies,
        }
    }

    async fn options(&self) -> std::io::Result<ExtractOptions> {
        let cookie_file = match &self.cookies {
            CookiePolicy::Fixed(path) => path.clone(),
            CookiePolicy::RefreshPerRequest(file) => {
                // Filesystem work stays off the async workers
                let file = file.clone();
                tokio::task::spawn_blocking(move || file.sync_from_env())
                    .await
                    .map_err(std::io::Error::other)??
            }
        };
        Ok(self.settings.extract_options(cookie_file))
    }

    /// Extract and normalize one URL, assumed to be validated by the caller.
    ///
    /// Provider errors never escape: they come back as an `ExtractionFailure`.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult, ExtractionFailure> {
        let video_id = extract_video_id(url);

        let options = match self.options().await {
            Ok(options) => options,
            Err(e) => {
                error!("Unexpected error in video extraction: failed to prepare cookies: {}", e);
                return Err(extraction_failed());
            }
        };

        match self.extractor.extract_info(url, &options).await {
            Ok(info) => {
                let result = ExtractionResult::from_info(info, url, video_id);
                info!(
                    "Successfully extracted data for video: {}",
                    result.title.as_deref().unwrap_or("<untitled>")
                );
                Ok(result)
            }
            Err(e) => {
                let failure = classify(&e);
                error!(
                    extractor = self.extractor.id(),
                    kind = %failure.kind,
                    "Extraction failed for {}: {}",
                    url,
                    e
                );
                Err(failure)
            }
        }
    }
}
