//! End-to-end tests of the HTTP surface with a stand-in provider; no network, no yt-dlp.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use tubeinfo::extractor::{ExtractOptions, Extractor, Format, VideoInfo};
use tubeinfo::normalizer::{CookiePolicy, VideoService};
use tubeinfo::server::{router, AppState};
use tubeinfo::utils::{ExtractorError, ServerSettings};

enum Behavior {
    Succeed,
    DownloadError(&'static str),
    Unexpected,
    Panic,
}

struct MockExtractor {
    behavior: Behavior,
    calls: AtomicUsize,
}

#[async_trait]
impl Extractor for MockExtractor {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn extract_info(
        &self,
        _url: &str,
        _options: &ExtractOptions,
    ) -> Result<VideoInfo, ExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => Ok(sample_video()),
            Behavior::DownloadError(message) => Err(ExtractorError::Download(message.to_string())),
            Behavior::Unexpected => Err(ExtractorError::SerializationError(
                serde_json::from_str::<VideoInfo>("{\"title\": stack trace with internals")
                    .unwrap_err(),
            )),
            Behavior::Panic => panic!("normalizer bug"),
        }
    }
}

fn sample_video() -> VideoInfo {
    VideoInfo {
        id: Some("Nl-GCrDypNY".to_string()),
        title: Some("Sample Video".to_string()),
        duration: Some(serde_json::Number::from(60u64)),
        uploader: Some("Uploader".to_string()),
        webpage_url: Some("https://www.youtube.com/watch?v=Nl-GCrDypNY".to_string()),
        url: Some("https://cdn.example/best.mp4".to_string()),
        formats: Some(vec![
            Format {
                format_id: Some("18".to_string()),
                ext: Some("mp4".to_string()),
                resolution: Some("640x360".to_string()),
                url: Some("https://cdn.example/18.mp4".to_string()),
                protocol: Some("https".to_string()),
                format_note: Some("360p".to_string()),
                ..Default::default()
            },
            Format {
                format_id: Some("95".to_string()),
                url: Some("https://cdn.example/95.m3u8".to_string()),
                protocol: Some("m3u8_native".to_string()),
                ..Default::default()
            },
        ]),
        ..Default::default()
    }
}

struct TestApp {
    app: Router,
    extractor: Arc<MockExtractor>,
}

impl TestApp {
    fn new(behavior: Behavior) -> Self {
        let extractor = Arc::new(MockExtractor {
            behavior,
            calls: AtomicUsize::new(0),
        });
        let settings = ServerSettings::default();
        let service = VideoService::new(
            extractor.clone(),
            settings.clone(),
            CookiePolicy::Fixed(None),
        );
        Self {
            app: router(AppState::new(service, settings)),
            extractor,
        }
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .header(header::HOST, "api.test")
            .body(Body::empty())
            .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn calls(&self) -> usize {
        self.extractor.calls.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn video_returns_normalized_result() {
    let app = TestApp::new(Behavior::Succeed);
    let (status, body) = app
        .get("/video?url=https://www.youtube.com/watch?v=Nl-GCrDypNY")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["video_id"], "Nl-GCrDypNY");
    assert_eq!(body["title"], "Sample Video");
    assert_eq!(body["duration"], 60);
    assert_eq!(body["best_video_url"], "https://cdn.example/best.mp4");
    assert_eq!(body["format_count"], 2);
    assert_eq!(
        body["hls_streams"],
        json!([{"quality": "unknown", "url": "https://cdn.example/95.m3u8"}])
    );
    assert_eq!(body["thumbnails"], json!([]));
    assert!(body.get("description").is_none());
    assert!(body.get("like_count").is_none());
    assert_eq!(app.calls(), 1);
}

#[tokio::test]
async fn short_link_url_is_accepted() {
    let app = TestApp::new(Behavior::Succeed);
    let (status, body) = app.get("/video?url=https%3A%2F%2Fyoutu.be%2FNl-GCrDypNY").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["video_id"], "Nl-GCrDypNY");
    assert_eq!(body["original_url"], "https://youtu.be/Nl-GCrDypNY");
}

#[tokio::test]
async fn repeated_url_parameter_uses_first_value() {
    let app = TestApp::new(Behavior::Succeed);
    let (status, body) = app
        .get("/video?url=https://youtu.be/Nl-GCrDypNY&url=https://youtu.be/other")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["video_id"], "Nl-GCrDypNY");
    assert_eq!(body["original_url"], "https://youtu.be/Nl-GCrDypNY");

    let (status, body) = app
        .get("/video?url=&url=https://youtu.be/Nl-GCrDypNY")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameter: url");
}

#[tokio::test]
async fn blank_watch_id_is_omitted() {
    let app = TestApp::new(Behavior::Succeed);
    let (status, body) = app.get("/video?url=https://www.youtube.com/watch?v=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("video_id").is_none());
}

#[tokio::test]
async fn missing_url_is_rejected_before_domain_check() {
    let app = TestApp::new(Behavior::Succeed);

    for uri in ["/video", "/video?url=", "/video?other=youtube.com"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Missing required parameter: url", "{uri}");
        assert!(body["message"].is_string());
    }
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn foreign_urls_are_rejected() {
    let app = TestApp::new(Behavior::Succeed);

    for uri in [
        "/video?url=https://vimeo.com/12345",
        "/video?url=not-a-url",
        "/video?url=https://YOUTUBE.COM/watch?v=x",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body,
            json!({"error": "Invalid URL", "message": "Please provide a valid YouTube URL"})
        );
    }
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn classified_failures_map_to_404() {
    let cases = [
        ("ERROR: [youtube] x: Video unavailable", "Video unavailable"),
        ("ERROR: [youtube] x: Private video. Sign in", "Private video"),
        ("ERROR: This video has been removed by the user", "Video removed"),
        ("ERROR: Unable to download webpage: timed out", "Download error"),
    ];

    for (message, kind) in cases {
        let app = TestApp::new(Behavior::DownloadError(message));
        let (status, body) = app.get("/video?url=https://youtu.be/x").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{message}");
        assert_eq!(body["error"], kind);
    }
}

#[tokio::test]
async fn download_error_embeds_provider_message() {
    let app = TestApp::new(Behavior::DownloadError("ERROR: Sign in to confirm your age"));
    let (_, body) = app.get("/video?url=https://youtu.be/x").await;

    assert_eq!(
        body["message"],
        "Unable to extract video data: ERROR: Sign in to confirm your age"
    );
}

#[tokio::test]
async fn unexpected_provider_error_hides_details() {
    let app = TestApp::new(Behavior::Unexpected);
    let (status, body) = app.get("/video?url=https://youtu.be/x").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": "Extraction failed",
            "message": "An unexpected error occurred while extracting video data"
        })
    );
}

#[tokio::test]
async fn normalizer_panic_becomes_generic_500() {
    let app = TestApp::new(Behavior::Panic);
    let (status, body) = app.get("/video?url=https://youtu.be/x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Internal server error",
            "message": "An error occurred while processing the video URL"
        })
    );

    // The server keeps answering afterwards
    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_never_touches_extraction() {
    let app = TestApp::new(Behavior::Panic);
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn index_describes_service_using_request_host() {
    let app = TestApp::new(Behavior::Unexpected);
    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "YouTube Video Data Extraction API");
    assert_eq!(
        body["example"],
        "http://api.test/video?url=https://www.youtube.com/watch?v=Nl-GCrDypNY"
    );
    assert!(body["usage"].as_str().unwrap().starts_with("GET /video?url="));
    assert_eq!(app.calls(), 0);
}

#[tokio::test]
async fn unknown_routes_get_json_404() {
    let app = TestApp::new(Behavior::Succeed);
    let (status, body) = app.get("/does/not/exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": "Endpoint not found",
            "message": "The requested endpoint does not exist"
        })
    );
}
