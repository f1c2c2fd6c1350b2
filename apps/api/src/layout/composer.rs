//! Featured layout composition: galleries in input order, with one quote
//! inserted after every third gallery until the quotes run out.

use serde::Serialize;

use crate::layout::span::{classify_aspect, classify_span, AspectClass, SpanClass};
use crate::models::{Gallery, Quote};

/// A quote follows every `QUOTE_CADENCE`-th gallery.
pub const QUOTE_CADENCE: usize = 3;

/// One block of the composed featured layout. Borrows from the composer's inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutItem<'a> {
    Gallery {
        gallery: &'a Gallery,
        span: SpanClass,
        aspect: AspectClass,
        /// Position of the gallery in the input slice.
        index: usize,
    },
    Quote { quote: &'a Quote },
}

impl LayoutItem<'_> {
    /// Quotes always take the full row.
    pub fn span(&self) -> SpanClass {
        match self {
            LayoutItem::Gallery { span, .. } => *span,
            LayoutItem::Quote { .. } => SpanClass::Full,
        }
    }
}

/// Interleaves `quotes` into `galleries`. Never fails; an empty gallery slice
/// yields an empty layout and an empty quote slice yields galleries only.
pub fn compose_layout<'a>(galleries: &'a [Gallery], quotes: &'a [Quote]) -> Vec<LayoutItem<'a>> {
    if galleries.is_empty() {
        return Vec::new();
    }

    let quote_slots = quotes.len().min(galleries.len() / QUOTE_CADENCE);
    let mut items = Vec::with_capacity(galleries.len() + quote_slots);
    let mut remaining_quotes = quotes.iter();

    for (index, gallery) in galleries.iter().enumerate() {
        items.push(LayoutItem::Gallery {
            gallery,
            span: classify_span(gallery),
            aspect: classify_aspect(gallery),
            index,
        });

        if (index + 1) % QUOTE_CADENCE == 0 {
            if let Some(quote) = remaining_quotes.next() {
                items.push(LayoutItem::Quote { quote });
            }
        }
    }

    items
}
