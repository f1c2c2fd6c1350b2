//! Featured-work blocks: the composed layout flattened into what a grid renders.

use serde::Serialize;

use crate::layout::{compose_layout, AspectClass, LayoutItem, SpanClass};
use crate::models::{Gallery, Quote};

/// Columns of the featured grid at its widest breakpoint.
pub const FEATURED_GRID_COLUMNS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeaturedBlock {
    Gallery(GalleryBlock),
    Quote(QuoteBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryBlock {
    pub id: String,
    pub href: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub span: SpanClass,
    pub columns: u8,
    pub image_sizes: &'static str,
    pub aspect: AspectClass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub span: SpanClass,
    pub columns: u8,
}

impl From<LayoutItem<'_>> for FeaturedBlock {
    fn from(item: LayoutItem<'_>) -> Self {
        let span = item.span();
        match item {
            LayoutItem::Gallery {
                gallery, aspect, ..
            } => FeaturedBlock::Gallery(GalleryBlock {
                id: gallery.id.clone(),
                href: gallery.href(),
                title: gallery.title.clone(),
                subtitle: gallery.sub_title.clone(),
                image: gallery.cover_image().map(str::to_string),
                span,
                columns: span.columns(FEATURED_GRID_COLUMNS),
                image_sizes: span.image_sizes(),
                aspect,
            }),
            LayoutItem::Quote { quote } => FeaturedBlock::Quote(QuoteBlock {
                text: quote.text.clone(),
                author: quote.author.clone(),
                span,
                columns: span.columns(FEATURED_GRID_COLUMNS),
            }),
        }
    }
}

/// Composes featured galleries and quotes into renderable blocks.
/// Empty when there are no galleries; the section is then simply not shown.
pub fn build_featured(galleries: &[Gallery], quotes: &[Quote]) -> Vec<FeaturedBlock> {
    compose_layout(galleries, quotes)
        .into_iter()
        .map(FeaturedBlock::from)
        .collect()
}
