//! tubeinfo - YouTube video data extraction API
//!
//! Serves video metadata and direct streaming URLs over HTTP, resolved
//! through yt-dlp.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubeinfo::normalizer::{CookiePolicy, VideoService};
use tubeinfo::server::{self, AppState};
use tubeinfo::utils::{CookieFile, ServerSettings};
use tubeinfo::YtDlpExtractor;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listening port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the yt-dlp binary (overrides YTDLP_PATH)
    #[arg(long)]
    ytdlp_path: Option<PathBuf>,

    /// Extract a single URL, print the JSON response and exit
    #[arg(long, value_name = "URL")]
    extract: Option<String>,
}

impl Args {
    fn apply(&self, settings: &mut ServerSettings) {
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(path) = &self.ytdlp_path {
            settings.ytdlp_path = Some(path.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tubeinfo=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let mut settings = ServerSettings::from_env().context("Failed to load configuration")?;
    args.apply(&mut settings);

    let cookie_file = CookieFile::new(&settings.cookies_file, &settings.cookies_env);
    let cookie_path = cookie_file
        .sync_from_env()
        .context("Failed to materialize cookies file")?;
    let cookies = if settings.refresh_cookies_per_request {
        CookiePolicy::RefreshPerRequest(cookie_file)
    } else {
        CookiePolicy::Fixed(cookie_path)
    };

    let extractor = match YtDlpExtractor::new(settings.ytdlp_path.as_deref()) {
        Ok(extractor) => extractor,
        Err(e) => {
            // Keep serving; every extraction will fail until yt-dlp is installed
            warn!("{}. Video requests will fail.", e);
            warn!("Install it with `pip install yt-dlp` or see https://github.com/yt-dlp/yt-dlp");
            YtDlpExtractor::with_path("yt-dlp")
        }
    };

    info!("Extracting with {}", extractor.ytdlp_path().display());
    let service = VideoService::new(Arc::new(extractor), settings.clone(), cookies);

    if let Some(url) = args.extract {
        return extract_cli(&service, &url).await;
    }

    let addr = settings.bind_addr();
    let app = server::router(AppState::new(service, settings));

    info!("Starting YouTube Video Data Extraction API on {}", addr);
    server::start_server(&addr, app).await
}

async fn extract_cli(service: &VideoService, url: &str) -> Result<()> {
    let body = match service.extract(url).await {
        Ok(result) => serde_json::to_string_pretty(&result)?,
        Err(failure) => serde_json::to_string_pretty(&failure)?,
    };
    println!("{}", body);
    Ok(())
}
