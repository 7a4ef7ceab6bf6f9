use crate::normalizer::VideoService;
use crate::utils::config::ServerSettings;
use std::sync::Arc;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VideoService>,
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    pub fn new(service: VideoService, settings: ServerSettings) -> Self {
        Self {
            service: Arc::new(service),
            settings: Arc::new(settings),
        }
    }
}
