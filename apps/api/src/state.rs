use crate::config::Config;
use crate::content::SharedStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Content backend: filesystem or S3, optionally behind the Redis cache.
    pub store: SharedStore,
    pub config: Config,
}
