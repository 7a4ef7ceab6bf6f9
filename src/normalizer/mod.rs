//! Extraction normalizer: provider call, reshaping and error classification

pub mod classify;
pub mod response;
pub mod service;
pub mod video_id;

pub use classify::{classify, classify_download_error};
pub use response::{
    ExtractionFailure, ExtractionResult, FailureKind, FormatDescriptor, StreamingVariant,
    ThumbnailDescriptor,
};
pub use service::{CookiePolicy, VideoService};
pub use video_id::{extract_video_id, has_platform_marker};
