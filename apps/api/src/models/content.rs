use serde::{Deserialize, Serialize};

/// A short attributed text block shown between featured galleries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// `docs/hero.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroDoc {
    #[serde(default)]
    pub slides: Vec<HeroSlideDoc>,
}

/// One configured hero slide. Explicit images win over the gallery cover.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideDoc {
    #[serde(default)]
    pub gallery_id: Option<String>,
    #[serde(default)]
    pub desktop_image: Option<String>,
    #[serde(default)]
    pub mobile_image: Option<String>,
}

/// `docs/featured.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedDoc {
    #[serde(default)]
    pub galleries: Vec<String>,
}

/// `docs/quotes.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotesDoc {
    #[serde(default)]
    pub quotes: Vec<Quote>,
}
