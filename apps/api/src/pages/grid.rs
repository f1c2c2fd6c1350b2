//! Gallery and project grid cards.

use serde::Serialize;

use crate::models::Gallery;

/// Reveal delay between consecutive gallery cards.
const GALLERY_STAGGER_MS: u64 = 80;

/// Project cards above the fold load eagerly.
const PROJECT_PRIORITY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryCard {
    pub id: String,
    pub href: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Landscape cover, cropped to 4:3 by the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub href: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub alt: String,
    pub priority: bool,
}

pub fn build_gallery_grid(galleries: &[Gallery]) -> Vec<GalleryCard> {
    galleries
        .iter()
        .enumerate()
        .map(|(index, gallery)| GalleryCard {
            id: gallery.id.clone(),
            href: gallery.href(),
            title: gallery.title.clone(),
            subtitle: gallery.sub_title.clone(),
            image: gallery.horizontal_cover_image().map(str::to_string),
            reveal_delay_ms: index as u64 * GALLERY_STAGGER_MS,
        })
        .collect()
}

pub fn build_project_grid(galleries: &[Gallery]) -> Vec<ProjectCard> {
    galleries
        .iter()
        .enumerate()
        .map(|(index, gallery)| ProjectCard {
            id: gallery.id.clone(),
            href: gallery.href(),
            title: gallery.title.clone(),
            subtitle: gallery.sub_title.clone(),
            image: gallery.cover_image().map(str::to_string),
            alt: format!(
                "{} - {}",
                gallery.title,
                gallery.sub_title.as_deref().unwrap_or("")
            ),
            priority: index < PROJECT_PRIORITY_COUNT,
        })
        .collect()
}
