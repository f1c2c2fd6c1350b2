//! Content store: the only path from handlers to stored portfolio documents.
//!
//! Documents are JSON objects under a flat key space:
//! - `docs/{name}.json`: singleton documents (`hero`, `featured`, `quotes`)
//! - `galleries/{id}.json`: one document per gallery
//!
//! Backends implement [`ContentStore`] for raw bytes; the typed helpers in this
//! module own key layout, decoding and the "missing means empty" defaults.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::models::{FeaturedDoc, Gallery};

pub mod cache;
pub mod fs;
#[cfg(test)]
pub mod memory;
pub mod s3;

pub use cache::CachedStore;
pub use fs::FsStore;
pub use s3::S3Store;

const DOCS_PREFIX: &str = "docs/";
const GALLERIES_PREFIX: &str = "galleries/";
const JSON_SUFFIX: &str = ".json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Malformed document '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw key/value access to stored documents.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Returns the document body, or `None` if no document exists at `key`.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, ContentError>;

    /// Returns every key starting with `prefix`, sorted lexicographically.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, ContentError>;
}

pub type SharedStore = Arc<dyn ContentStore>;

/// Ids become part of storage keys, so only a conservative alphabet is accepted.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn doc_key(name: &str) -> String {
    format!("{DOCS_PREFIX}{name}{JSON_SUFFIX}")
}

pub fn gallery_key(id: &str) -> String {
    format!("{GALLERIES_PREFIX}{id}{JSON_SUFFIX}")
}

/// Extracts the gallery id from a `galleries/{id}.json` key.
fn gallery_id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(GALLERIES_PREFIX)?
        .strip_suffix(JSON_SUFFIX)
        .filter(|id| is_valid_id(id))
}

fn decode<T: DeserializeOwned>(key: &str, body: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(body).map_err(|source| ContentError::Parse {
        key: key.to_string(),
        source,
    })
}

/// Fetches a singleton document. A missing document decodes as `T::default()`.
pub async fn fetch_doc<T>(store: &dyn ContentStore, name: &str) -> Result<T, ContentError>
where
    T: DeserializeOwned + Default,
{
    let key = doc_key(name);
    match store.get(&key).await? {
        Some(body) => decode(&key, &body),
        None => Ok(T::default()),
    }
}

/// Fetches one gallery. Unknown or invalid ids yield `None`.
pub async fn fetch_gallery_by_id(
    store: &dyn ContentStore,
    id: &str,
) -> Result<Option<Gallery>, ContentError> {
    if !is_valid_id(id) {
        return Ok(None);
    }
    let key = gallery_key(id);
    let Some(body) = store.get(&key).await? else {
        return Ok(None);
    };
    let mut gallery: Gallery = decode(&key, &body)?;
    if gallery.id.is_empty() {
        gallery.id = id.to_string();
    }
    Ok(Some(gallery))
}

/// Like [`fetch_gallery_by_id`], but a malformed document is logged and
/// treated as absent so one broken gallery cannot take down a whole page.
/// Store failures still propagate.
pub async fn fetch_gallery_or_skip(
    store: &dyn ContentStore,
    id: &str,
) -> Result<Option<Gallery>, ContentError> {
    match fetch_gallery_by_id(store, id).await {
        Err(ContentError::Parse { key, source }) => {
            warn!("Skipping malformed gallery '{key}': {source}");
            Ok(None)
        }
        other => other,
    }
}

/// Fetches galleries in the order of `ids`, skipping any that are missing or malformed.
pub async fn fetch_galleries(
    store: &dyn ContentStore,
    ids: &[String],
) -> Result<Vec<Gallery>, ContentError> {
    let mut galleries = Vec::with_capacity(ids.len());
    for id in ids {
        match fetch_gallery_or_skip(store, id).await? {
            Some(gallery) => galleries.push(gallery),
            None => warn!("Gallery '{id}' unavailable; skipping"),
        }
    }
    Ok(galleries)
}

/// Every stored gallery, in key order.
pub async fn fetch_all_galleries(store: &dyn ContentStore) -> Result<Vec<Gallery>, ContentError> {
    let keys = store.list(GALLERIES_PREFIX).await?;
    let ids: Vec<String> = keys
        .iter()
        .filter_map(|key| gallery_id_from_key(key))
        .map(str::to_string)
        .collect();
    fetch_galleries(store, &ids).await
}

/// Galleries listed in `docs/featured.json`, in document order.
pub async fn fetch_featured_galleries(
    store: &dyn ContentStore,
) -> Result<Vec<Gallery>, ContentError> {
    let featured: FeaturedDoc = fetch_doc(store, "featured").await?;
    fetch_galleries(store, &featured.galleries).await
}
