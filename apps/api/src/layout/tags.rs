//! Case- and whitespace-insensitive tag matching.
//!
//! Editors enter tags as free text, often several per field (`"Hero, editorial"`),
//! so every raw tag is split on commas, trimmed and lower-cased before comparison.

use crate::models::Gallery;

/// Flattens a gallery's raw tags into normalized labels. Empty fragments are dropped.
pub fn normalized_tags(gallery: &Gallery) -> impl Iterator<Item = String> + '_ {
    gallery
        .tags
        .iter()
        .flatten()
        .flat_map(|raw| raw.split(','))
        .map(|fragment| fragment.trim().to_lowercase())
        .filter(|fragment| !fragment.is_empty())
}

/// True if any normalized tag of `gallery` equals `tag` (itself trimmed and lower-cased).
pub fn has_tag(gallery: &Gallery, tag: &str) -> bool {
    let wanted = tag.trim().to_lowercase();
    normalized_tags(gallery).any(|t| t == wanted)
}

/// True if the gallery carries at least one of `tags`.
pub fn has_any_tag(gallery: &Gallery, tags: &[&str]) -> bool {
    tags.iter().any(|tag| has_tag(gallery, tag))
}
