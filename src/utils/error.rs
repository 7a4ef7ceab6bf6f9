//! Error handling for tubeinfo

use thiserror::Error;

/// Failures raised by an extraction provider
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    /// The provider ran and reported that it could not extract the video.
    /// The text is the provider's own message.
    #[error("{0}")]
    Download(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid provider output: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Invalid values in the process configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
