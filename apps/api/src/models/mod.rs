pub mod content;
pub mod gallery;

pub use content::{FeaturedDoc, HeroDoc, HeroSlideDoc, Quote, QuotesDoc};
pub use gallery::Gallery;
