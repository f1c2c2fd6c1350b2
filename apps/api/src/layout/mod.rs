// Featured-work layout: tags, span and aspect classes, quote interleaving.
// Everything here is pure and synchronous; handlers call it directly.

pub mod composer;
pub mod slideshow;
pub mod span;
pub mod tags;

// Re-export the public API consumed by the page builders and handlers.
pub use composer::{compose_layout, LayoutItem};
pub use slideshow::SlideRotator;
pub use span::{AspectClass, SpanClass};
