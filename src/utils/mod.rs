//! Configuration, cookie handling and error types

pub mod config;
pub mod cookies;
pub mod error;

// Re-export for convenience
pub use config::ServerSettings;
pub use cookies::CookieFile;
pub use error::{ConfigError, ExtractorError};
