use crate::server::error::unexpected_error;
use crate::server::handlers::{get_video, health, index, not_found};
use crate::server::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/video", get(get_video))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Unhandled error while serving request: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(unexpected_error())).into_response()
}
