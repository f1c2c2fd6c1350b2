use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use super::{ContentError, ContentStore};

/// Serves documents from a local directory mirroring the bucket layout.
/// Used for local development and previews.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        // Keys are built from validated ids, but never let one escape the root.
        if key.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
            return None;
        }
        Some(self.root.join(key))
    }
}

#[async_trait]
impl ContentStore for FsStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, ContentError> {
        let Some(path) = self.path_for(key) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Some(Bytes::from(body))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No document at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, ContentError> {
        // Prefixes name a directory ("galleries/"); the listing is not recursive.
        let dir_part = prefix.trim_end_matches('/');
        let dir = match self.path_for(dir_part) {
            Some(dir) => dir,
            None if dir_part.is_empty() => self.root.clone(),
            None => return Ok(Vec::new()),
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = file_name(&entry.path()) {
                keys.push(format!("{prefix}{name}"));
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, key: &str, body: &str) {
        let path = root.join(key);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/hero.json", r#"{"slides": []}"#);
        let store = FsStore::new(dir.path());

        let body = store.get("docs/hero.json").await.unwrap().unwrap();
        assert_eq!(&body[..], br#"{"slides": []}"#);
        assert!(store.get("docs/quotes.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "secret.json", "{}");
        let store = FsStore::new(dir.path().join("content"));
        assert!(store.get("../secret.json").await.unwrap().is_none());
        assert!(store.get("docs//x.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "galleries/b.json", "{}");
        write(dir.path(), "galleries/a.json", "{}");
        write(dir.path(), "galleries/nested/c.json", "{}");
        let store = FsStore::new(dir.path());

        let keys = store.list("galleries/").await.unwrap();
        assert_eq!(keys, vec!["galleries/a.json", "galleries/b.json"]);
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        assert!(store.list("galleries/").await.unwrap().is_empty());
    }
}
