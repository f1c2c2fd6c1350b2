use serde::{Deserialize, Serialize};

/// A themed collection of images as stored in `galleries/{id}.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    /// Filled from the storage key when the document omits it.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    /// Landscape crop used by the gallery grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo_horizontal: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Width / height of each image, parallel to `image_urls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_aspect_ratios: Option<Vec<f64>>,
    /// Free-text labels; each entry may hold several comma-separated labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Gallery {
    /// The cover photo, falling back to the first image.
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_photo
            .as_deref()
            .or_else(|| self.image_urls.first().map(String::as_str))
    }

    /// The landscape cover, falling back to [`Gallery::cover_image`].
    pub fn horizontal_cover_image(&self) -> Option<&str> {
        self.cover_photo_horizontal
            .as_deref()
            .or_else(|| self.cover_image())
    }

    /// Aspect ratio of the first image, if one was recorded.
    pub fn first_aspect_ratio(&self) -> Option<f64> {
        self.image_aspect_ratios
            .as_ref()
            .and_then(|ratios| ratios.first().copied())
    }

    /// Link target of the gallery's detail page.
    pub fn href(&self) -> String {
        format!("/gallery/{}", self.id)
    }
}
