//! Mapping of provider failures onto the public error taxonomy
//!
//! The provider only gives us free text, so classification is substring
//! matching. Keep every rule in `classify_download_error` so it can be swapped
//! out if the provider ever reports structured errors.

use crate::normalizer::response::{ExtractionFailure, FailureKind};
use crate::utils::error::ExtractorError;

/// Ordered (needle, kind, message) rules; the first matching needle wins
const DOWNLOAD_ERROR_RULES: [(&str, FailureKind, &str); 3] = [
    (
        "Video unavailable",
        FailureKind::VideoUnavailable,
        "The requested video is not available or has been removed",
    ),
    (
        "Private video",
        FailureKind::PrivateVideo,
        "The requested video is private and cannot be accessed",
    ),
    (
        "removed by the user",
        FailureKind::VideoRemoved,
        "The requested video has been removed by the user",
    ),
];

const EXTRACTION_FAILED_MESSAGE: &str =
    "An unexpected error occurred while extracting video data";

/// Classify the message of a provider download error
pub fn classify_download_error(message: &str) -> ExtractionFailure {
    DOWNLOAD_ERROR_RULES
        .iter()
        .find(|(needle, _, _)| message.contains(needle))
        .map(|(_, kind, text)| ExtractionFailure {
            kind: *kind,
            message: (*text).to_string(),
        })
        .unwrap_or_else(|| ExtractionFailure {
            kind: FailureKind::DownloadError,
            message: format!("Unable to extract video data: {}", message),
        })
}

/// Failure reported for anything that is not a provider download error.
/// The underlying error text is never included.
pub fn extraction_failed() -> ExtractionFailure {
    ExtractionFailure {
        kind: FailureKind::ExtractionFailed,
        message: EXTRACTION_FAILED_MESSAGE.to_string(),
    }
}

pub fn classify(error: &ExtractorError) -> ExtractionFailure {
    match error {
        ExtractorError::Download(message) => classify_download_error(message),
        _ => extraction_failed(),
    }
}
