//! tubeinfo library

pub mod extractor;
pub mod normalizer;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{ExtractOptions, Extractor, Format, VideoInfo, YtDlpExtractor};
pub use normalizer::{CookiePolicy, ExtractionFailure, ExtractionResult, VideoService};
pub use server::{router, AppState};
pub use utils::{CookieFile, ServerSettings};
