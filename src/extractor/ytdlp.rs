//! yt-dlp wrapper for video extraction
//!
//! This module resolves video information by running yt-dlp as a subprocess
//! and parsing the JSON document it prints. Nothing is downloaded.

use crate::extractor::models::VideoInfo;
use crate::extractor::traits::{ExtractOptions, Extractor};
use crate::utils::error::ExtractorError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Video info provider backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize extractor and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. Explicitly configured path
    /// 2. System PATH
    /// 3. Common installation paths (Homebrew, pip user installs, etc.)
    pub fn new(configured: Option<&Path>) -> Result<Self, ExtractorError> {
        if let Some(path) = configured {
            if path.is_file() {
                info!("Using configured yt-dlp: {}", path.display());
                return Ok(Self::with_path(path));
            }
            warn!("Configured yt-dlp path {} does not exist", path.display());
        }

        match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(ExtractorError::YtDlpNotFound)
            }
        }
    }

    /// Use a known binary without probing the filesystem
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: path.into(),
        }
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Uses: yt-dlp -J --no-download -f <selector> [--cookies <file>] <url>
    async fn extract_info(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<VideoInfo, ExtractorError> {
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .args(build_args(url, options))
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = download_error_message(&stderr, output.status.code());
            error!("yt-dlp extraction failed: {}", message);
            return Err(ExtractorError::Download(message));
        }

        let json_str = String::from_utf8(output.stdout)?;
        let video_info: VideoInfo = serde_json::from_str(&json_str)?;

        Ok(video_info)
    }
}

/// Command line for a metadata-only extraction
pub fn build_args(url: &str, options: &ExtractOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--dump-single-json".into(),
        "--no-download".into(),
        "--no-warnings".into(),
        "-f".into(),
        options.format.as_str().into(),
    ];

    for (name, value) in &options.http_headers {
        args.push("--add-header".into());
        args.push(format!("{}:{}", name, value).into());
    }

    if let Some(cookie_file) = &options.cookie_file {
        args.push("--cookies".into());
        args.push(cookie_file.as_os_str().to_owned());
    }

    // Keep URLs starting with '-' from being read as options
    args.push("--".into());
    args.push(url.into());
    args
}

/// Reduce yt-dlp's stderr to the message of its download error
///
/// yt-dlp prefixes fatal errors with `ERROR:`; anything else on stderr is
/// progress chatter. Falls back to the full stderr, then to the exit code.
pub fn download_error_message(stderr: &str, exit_code: Option<i32>) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR:"))
        .collect();

    if !errors.is_empty() {
        return errors.join("\n");
    }

    let trimmed = stderr.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match exit_code {
        Some(code) => format!("yt-dlp exited with status {}", code),
        None => "yt-dlp was terminated by a signal".to_string(),
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        debug!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found in PATH or common locations");
    None
}

fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel), manual installs
        "/usr/local/bin/yt-dlp",
        // Distribution packages
        "/usr/bin/yt-dlp",
        // pip --user
        "~/.local/bin/yt-dlp",
    ];

    common_paths
        .iter()
        .map(|path_str| expand_home(path_str))
        .find(|path| path.exists() && is_executable(path))
}

fn expand_home(path_str: &str) -> PathBuf {
    match path_str.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path_str)),
        None => PathBuf::from(path_str),
    }
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}
