use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use super::{ContentError, ContentStore};

/// In-memory store for tests. Counts `get` calls so cache tests can observe hits.
#[derive(Default)]
pub struct MemoryStore {
    docs: BTreeMap<String, Bytes>,
    gets: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, body: &str) -> Self {
        self.docs
            .insert(key.to_string(), Bytes::copy_from_slice(body.as_bytes()));
        self
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, ContentError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.docs.get(key).cloned())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, ContentError> {
        Ok(self
            .docs
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
