use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{
    fetch_all_galleries, fetch_doc, fetch_featured_galleries, fetch_gallery_by_id,
};
use crate::errors::AppError;
use crate::layout::{compose_layout, LayoutItem};
use crate::models::{Gallery, Quote, QuotesDoc};
use crate::pages::featured::{build_featured, FeaturedBlock};
use crate::pages::grid::{build_gallery_grid, build_project_grid, GalleryCard, ProjectCard};
use crate::pages::hero::{load_hero_slides, HeroSlideshow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HomeQuery {
    /// Slide to show first; wrapped into range.
    #[serde(default)]
    pub slide: usize,
}

#[derive(Serialize)]
pub struct HomePage {
    pub hero: HeroSlideshow,
    pub featured: Vec<FeaturedBlock>,
}

/// GET /api/v1/home
pub async fn handle_home(
    State(state): State<AppState>,
    query: Result<Query<HomeQuery>, QueryRejection>,
) -> Result<Json<HomePage>, AppError> {
    let Query(params) = query?;
    let store = state.store.as_ref();

    let slides = load_hero_slides(store).await?;
    let quotes: QuotesDoc = fetch_doc(store, "quotes").await?;
    let galleries = fetch_featured_galleries(store).await?;

    let featured = build_featured(&galleries, &quotes.quotes);
    debug!(
        "Home page: {} hero slides, {} featured blocks",
        slides.len(),
        featured.len()
    );

    Ok(Json(HomePage {
        hero: HeroSlideshow::new(slides, params.slide),
        featured,
    }))
}

/// GET /api/v1/galleries
pub async fn handle_gallery_grid(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryCard>>, AppError> {
    let galleries = fetch_all_galleries(state.store.as_ref()).await?;
    Ok(Json(build_gallery_grid(&galleries)))
}

/// GET /api/v1/galleries/:id
pub async fn handle_get_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Gallery>, AppError> {
    let gallery = fetch_gallery_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Gallery {id} not found")))?;
    Ok(Json(gallery))
}

/// GET /api/v1/projects
pub async fn handle_project_grid(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectCard>>, AppError> {
    let galleries = fetch_all_galleries(state.store.as_ref()).await?;
    Ok(Json(build_project_grid(&galleries)))
}

#[derive(Deserialize)]
pub struct ComposeRequest {
    pub galleries: Vec<Gallery>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// POST /api/v1/layout/compose
pub async fn handle_compose(
    body: Result<Json<ComposeRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(req) = body?;
    let items: Vec<LayoutItem<'_>> = compose_layout(&req.galleries, &req.quotes);
    let body = serde_json::to_value(&items).map_err(anyhow::Error::from)?;
    Ok(Json(body))
}
