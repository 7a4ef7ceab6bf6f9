//! Server configuration

use crate::extractor::traits::{ExtractOptions, DEFAULT_FORMAT_SELECTOR, DEFAULT_USER_AGENT};
use crate::utils::cookies::COOKIES_ENV;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,

    /// Listening port
    pub port: u16,

    /// Environment variable holding raw cookie file contents
    pub cookies_env: String,

    /// Where the cookie file is materialized
    pub cookies_file: PathBuf,

    /// Re-materialize the cookie file before every extraction
    pub refresh_cookies_per_request: bool,

    /// Explicit yt-dlp binary, otherwise searched on PATH
    pub ytdlp_path: Option<PathBuf>,

    /// User-Agent sent to the platform
    pub user_agent: String,

    /// Format selector passed to the provider
    pub format_selector: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cookies_env: COOKIES_ENV.to_string(),
            cookies_file: PathBuf::from("cookies.txt"),
            refresh_cookies_per_request: false,
            ytdlp_path: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format_selector: DEFAULT_FORMAT_SELECTOR.to_string(),
        }
    }
}

impl ServerSettings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through `lookup`, falling back to defaults for unset
    /// or empty variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut settings = Self::default();

        if let Some(host) = get("HOST") {
            settings.host = host;
        }
        if let Some(port) = get("PORT") {
            settings.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port,
            })?;
        }
        if let Some(path) = get("COOKIES_FILE") {
            settings.cookies_file = PathBuf::from(path);
        }
        if let Some(flag) = get("REFRESH_COOKIES_PER_REQUEST") {
            settings.refresh_cookies_per_request =
                parse_bool(&flag).ok_or(ConfigError::InvalidValue {
                    name: "REFRESH_COOKIES_PER_REQUEST",
                    value: flag,
                })?;
        }
        if let Some(path) = get("YTDLP_PATH") {
            settings.ytdlp_path = Some(PathBuf::from(path));
        }
        if let Some(user_agent) = get("USER_AGENT") {
            settings.user_agent = user_agent;
        }
        if let Some(selector) = get("FORMAT_SELECTOR") {
            settings.format_selector = selector;
        }

        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Provider options for a call, with the cookie file if one exists
    pub fn extract_options(&self, cookie_file: Option<PathBuf>) -> ExtractOptions {
        ExtractOptions {
            format: self.format_selector.clone(),
            http_headers: vec![("User-Agent".to_string(), self.user_agent.clone())],
            cookie_file,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
