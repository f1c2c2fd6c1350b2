//! Grid span and aspect-ratio selection for featured galleries.
//!
//! # Span precedence (first match wins)
//! 1. `hero` / `highlight` tag → [`SpanClass::Full`]
//! 2. `editorial` / `pair` tag → [`SpanClass::Wide`]
//! 3. First image aspect ratio ≥ 1.8 → [`SpanClass::Wide`], otherwise [`SpanClass::Single`]
//!
//! Curatorial tags always override geometry. A missing, zero, negative or
//! non-finite aspect ratio falls back to [`DEFAULT_ASPECT_RATIO`].

use serde::{Deserialize, Serialize};

use crate::layout::tags::has_any_tag;
use crate::models::Gallery;

/// Assumed when a gallery has no usable first aspect ratio (a 3:2 landscape).
pub const DEFAULT_ASPECT_RATIO: f64 = 1.5;

/// Aspect ratios at or above this are panoramic and get a wide slot.
const WIDE_ASPECT_THRESHOLD: f64 = 1.8;

const FULL_SPAN_TAGS: &[&str] = &["hero", "highlight"];
const WIDE_SPAN_TAGS: &[&str] = &["editorial", "pair"];

/// How many grid columns a block occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanClass {
    /// One column.
    Single,
    /// Two columns (or the whole grid if it is narrower).
    Wide,
    /// Every column.
    Full,
}

impl SpanClass {
    /// Columns occupied in a grid of `grid_columns` columns.
    pub fn columns(self, grid_columns: u8) -> u8 {
        match self {
            SpanClass::Single => 1u8.min(grid_columns),
            SpanClass::Wide => 2u8.min(grid_columns),
            SpanClass::Full => grid_columns,
        }
    }

    /// Responsive `sizes` hint for the block's cover image.
    pub fn image_sizes(self) -> &'static str {
        match self {
            SpanClass::Full => "100vw",
            SpanClass::Wide => "(max-width: 768px) 100vw, 66vw",
            SpanClass::Single => "(max-width: 768px) 100vw, (max-width: 1024px) 50vw, 33vw",
        }
    }
}

/// Shape of the fixed-ratio frame a cover image is cropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectClass {
    /// 3:4, for ratios below 0.8.
    Portrait,
    /// 1:1, for ratios below 1.2.
    Square,
    /// 4:3, for ratios below 1.6.
    Landscape,
    /// 16:10 otherwise.
    Wide,
}

/// First aspect ratio of the gallery if present and positive, else the default.
pub fn effective_aspect_ratio(gallery: &Gallery) -> f64 {
    gallery
        .first_aspect_ratio()
        .filter(|ar| ar.is_finite() && *ar > 0.0)
        .unwrap_or(DEFAULT_ASPECT_RATIO)
}

/// Grid span for a gallery. Depends only on the gallery's tags and first aspect ratio.
pub fn classify_span(gallery: &Gallery) -> SpanClass {
    if has_any_tag(gallery, FULL_SPAN_TAGS) {
        return SpanClass::Full;
    }
    if has_any_tag(gallery, WIDE_SPAN_TAGS) {
        return SpanClass::Wide;
    }
    if effective_aspect_ratio(gallery) >= WIDE_ASPECT_THRESHOLD {
        SpanClass::Wide
    } else {
        SpanClass::Single
    }
}

/// Display-only frame shape; never affects ordering or span.
pub fn classify_aspect(gallery: &Gallery) -> AspectClass {
    match effective_aspect_ratio(gallery) {
        ar if ar < 0.8 => AspectClass::Portrait,
        ar if ar < 1.2 => AspectClass::Square,
        ar if ar < 1.6 => AspectClass::Landscape,
        _ => AspectClass::Wide,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(tags: &[&str], ratios: Option<Vec<f64>>) -> Gallery {
        Gallery {
            id: "g".into(),
            title: "G".into(),
            tags: if tags.is_empty() {
                None
            } else {
                Some(tags.iter().map(|t| t.to_string()).collect())
            },
            image_aspect_ratios: ratios,
            ..Default::default()
        }
    }

    // ── classify_span ───────────────────────────────────────────────────────

    #[test]
    fn test_hero_and_highlight_are_full_regardless_of_ratio() {
        for tag in [" Hero ", "HIGHLIGHT", "travel, hero"] {
            for ratios in [None, Some(vec![0.5]), Some(vec![3.0])] {
                assert_eq!(
                    classify_span(&gallery(&[tag], ratios.clone())),
                    SpanClass::Full,
                    "tag {tag:?} ratios {ratios:?}"
                );
            }
        }
    }

    #[test]
    fn test_editorial_and_pair_are_wide_regardless_of_ratio() {
        for tag in ["editorial", " Pair", "Editorial, pair"] {
            assert_eq!(
                classify_span(&gallery(&[tag], Some(vec![0.6]))),
                SpanClass::Wide
            );
        }
    }

    #[test]
    fn test_full_tags_take_precedence_over_wide_tags() {
        let g = gallery(&["editorial", "highlight"], Some(vec![1.0]));
        assert_eq!(classify_span(&g), SpanClass::Full);
    }

    #[test]
    fn test_untagged_uses_aspect_ratio() {
        assert_eq!(classify_span(&gallery(&[], Some(vec![2.0]))), SpanClass::Wide);
        assert_eq!(classify_span(&gallery(&[], Some(vec![1.0]))), SpanClass::Single);
        assert_eq!(classify_span(&gallery(&[], None)), SpanClass::Single);
    }

    #[test]
    fn test_wide_threshold_is_inclusive() {
        assert_eq!(classify_span(&gallery(&[], Some(vec![1.8]))), SpanClass::Wide);
        assert_eq!(
            classify_span(&gallery(&[], Some(vec![1.79]))),
            SpanClass::Single
        );
    }

    #[test]
    fn test_only_first_ratio_is_consulted() {
        let g = gallery(&[], Some(vec![1.0, 2.5, 3.0]));
        assert_eq!(classify_span(&g), SpanClass::Single);
    }

    #[test]
    fn test_invalid_ratios_fall_back_to_default() {
        for ratios in [Some(vec![]), Some(vec![0.0]), Some(vec![-2.0]), Some(vec![f64::NAN])] {
            let g = gallery(&[], ratios);
            assert_eq!(effective_aspect_ratio(&g), DEFAULT_ASPECT_RATIO);
            assert_eq!(classify_span(&g), SpanClass::Single);
        }
    }

    #[test]
    fn test_unrelated_tags_fall_through_to_geometry() {
        let g = gallery(&["portrait, film"], Some(vec![2.4]));
        assert_eq!(classify_span(&g), SpanClass::Wide);
    }

    // ── classify_aspect ─────────────────────────────────────────────────────

    #[test]
    fn test_aspect_thresholds() {
        let cases = [
            (0.5, AspectClass::Portrait),
            (0.79, AspectClass::Portrait),
            (0.8, AspectClass::Square),
            (1.19, AspectClass::Square),
            (1.2, AspectClass::Landscape),
            (1.59, AspectClass::Landscape),
            (1.6, AspectClass::Wide),
            (2.4, AspectClass::Wide),
        ];
        for (ratio, expected) in cases {
            assert_eq!(
                classify_aspect(&gallery(&[], Some(vec![ratio]))),
                expected,
                "ratio {ratio}"
            );
        }
    }

    #[test]
    fn test_aspect_default_is_landscape() {
        assert_eq!(classify_aspect(&gallery(&[], None)), AspectClass::Landscape);
    }

    #[test]
    fn test_aspect_ignores_tags() {
        let g = gallery(&["hero"], Some(vec![0.7]));
        assert_eq!(classify_aspect(&g), AspectClass::Portrait);
    }

    // ── presentation hints ──────────────────────────────────────────────────

    #[test]
    fn test_columns_per_grid_width() {
        assert_eq!(SpanClass::Single.columns(3), 1);
        assert_eq!(SpanClass::Wide.columns(3), 2);
        assert_eq!(SpanClass::Full.columns(3), 3);
        assert_eq!(SpanClass::Wide.columns(1), 1);
        assert_eq!(SpanClass::Full.columns(2), 2);
    }

    #[test]
    fn test_image_sizes() {
        assert_eq!(SpanClass::Full.image_sizes(), "100vw");
        assert!(SpanClass::Wide.image_sizes().ends_with("66vw"));
        assert!(SpanClass::Single.image_sizes().ends_with("33vw"));
    }
}
