//! Hero slideshow assembly.
//!
//! Slides come from `docs/hero.json`; each may name a gallery whose cover fills
//! in for any image the slide does not set explicitly. When no slide resolves,
//! the featured galleries' covers are used instead.

use serde::Serialize;
use tracing::warn;

use crate::content::{fetch_doc, fetch_gallery_or_skip, ContentError, ContentStore};
use crate::layout::SlideRotator;
use crate::models::{FeaturedDoc, Gallery, HeroDoc, HeroSlideDoc};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSlide {
    pub desktop_image: String,
    pub mobile_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideIndicator {
    pub index: usize,
    pub active: bool,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSlideshow {
    pub slides: Vec<HeroSlide>,
    pub current: usize,
    /// Slide the timer moves to next, so its images can be preloaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
    /// Absent when there is nothing to rotate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    /// Only rendered for two or more slides.
    pub indicators: Vec<SlideIndicator>,
    /// Index of the slide whose images load eagerly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_slide: Option<usize>,
}

impl HeroSlideshow {
    /// Builds the slideshow state with `requested` (wrapped) as the visible slide.
    pub fn new(slides: Vec<HeroSlide>, requested: usize) -> Self {
        let mut rotator = SlideRotator::new(slides.len());
        rotator.go_to(requested);
        let current = rotator.current();
        let next = rotator.is_auto_advancing().then(|| {
            let mut peek = rotator;
            peek.advance()
        });

        let indicators = if rotator.is_auto_advancing() {
            (0..slides.len())
                .map(|index| SlideIndicator {
                    index,
                    active: index == current,
                    aria_label: format!("Go to slide {}", index + 1),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            priority_slide: (!slides.is_empty()).then_some(0),
            interval_ms: rotator
                .interval()
                .and_then(|d| u64::try_from(d.as_millis()).ok()),
            current,
            next,
            indicators,
            slides,
        }
    }
}

/// Resolves one configured slide. `None` when no image can be found for it.
pub fn resolve_slide(slide: &HeroSlideDoc, gallery: Option<&Gallery>) -> Option<HeroSlide> {
    let cover = gallery.and_then(Gallery::cover_image);
    let desktop = slide.desktop_image.as_deref().or(cover)?;
    let mobile = slide.mobile_image.as_deref().or(cover)?;
    Some(HeroSlide {
        desktop_image: desktop.to_string(),
        mobile_image: mobile.to_string(),
        gallery_id: slide.gallery_id.clone(),
    })
}

/// A slide showing a gallery's cover on every screen size.
pub fn cover_slide(gallery: &Gallery) -> Option<HeroSlide> {
    let image = gallery.cover_image()?;
    Some(HeroSlide {
        desktop_image: image.to_string(),
        mobile_image: image.to_string(),
        gallery_id: Some(gallery.id.clone()),
    })
}

/// Loads hero slides, falling back to featured gallery covers whenever no
/// configured slide resolves to an image (including when none are configured).
pub async fn load_hero_slides(store: &dyn ContentStore) -> Result<Vec<HeroSlide>, ContentError> {
    let hero: HeroDoc = fetch_doc(store, "hero").await?;

    let mut slides = Vec::with_capacity(hero.slides.len());
    for (position, slide) in hero.slides.iter().enumerate() {
        let gallery = match slide.gallery_id.as_deref() {
            Some(id) => fetch_gallery_or_skip(store, id).await?,
            None => None,
        };
        match resolve_slide(slide, gallery.as_ref()) {
            Some(resolved) => slides.push(resolved),
            None => warn!("Hero slide {position} has no resolvable image; skipping"),
        }
    }

    if slides.is_empty() {
        let featured: FeaturedDoc = fetch_doc(store, "featured").await?;
        for id in &featured.galleries {
            if let Some(gallery) = fetch_gallery_or_skip(store, id).await? {
                slides.extend(cover_slide(&gallery));
            }
        }
    }

    Ok(slides)
}
