pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/api/v1/home", get(handlers::handle_home))
        .route("/api/v1/galleries", get(handlers::handle_gallery_grid))
        .route("/api/v1/galleries/:id", get(handlers::handle_get_gallery))
        .route("/api/v1/projects", get(handlers::handle_project_grid))
        // Layout
        .route("/api/v1/layout/compose", post(handlers::handle_compose))
        .with_state(state)
}
