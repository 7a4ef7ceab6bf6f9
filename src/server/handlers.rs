//! Route handlers

use crate::normalizer::{has_platform_marker, ExtractionResult};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;
use tracing::error;

pub const SERVICE_NAME: &str = "YouTube Video Data Extraction API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
const EXAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=Nl-GCrDypNY";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub example: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET / - service metadata and a usage example
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Json<ServiceInfo> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| state.settings.bind_addr());

    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        description: "Extract video metadata and streaming URLs from YouTube videos",
        usage: "GET /video?url=https://www.youtube.com/watch?v=VIDEO_ID",
        example: format!("http://{}/video?url={}", host, EXAMPLE_VIDEO_URL),
    })
}

/// GET /video?url=... - extract metadata for one video
pub async fn get_video(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ExtractionResult>, ApiError> {
    // Repeated parameters are allowed; the first `url` wins
    let url = params
        .into_iter()
        .find_map(|(name, value)| (name == "url").then_some(value))
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    if !has_platform_marker(&url) {
        return Err(ApiError::InvalidUrl);
    }

    // A panic inside extraction must not take the connection down with it
    let service = state.service.clone();
    let task_url = url.clone();
    let outcome = tokio::spawn(async move { service.extract(&task_url).await })
        .await
        .map_err(|e| {
            error!("Error processing video request for {}: {}", url, e);
            ApiError::Internal
        })?;

    Ok(Json(outcome?))
}

/// GET /health - liveness, never touches the extraction path
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "YouTube Video Data Extraction Server",
        version: SERVICE_VERSION,
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
