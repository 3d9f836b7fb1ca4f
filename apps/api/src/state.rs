use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The engine is pure, so configuration is all there is to share.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
