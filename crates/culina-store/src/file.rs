//! JSON file storage backend
//!
//! Each key maps to `<dir>/<key>.json`. The write path is not transactional:
//! an interruption mid-write loses the prior blob, which is acceptable for a
//! single-user, single-writer store.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

use culina_core::{RecipeStorage, StorageError, StorageResult};

/// Durable key-value storage backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl RecipeStorage for JsonFileStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(blob) => {
                trace!(path = %path.display(), bytes = blob.len(), "read storage blob");
                Ok(Some(blob))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Io(format!("failed to create {}: {e}", self.dir.display())))?;
        let path = self.path_for(key);
        tokio::fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))?;
        trace!(path = %path.display(), bytes = value.len(), "wrote storage blob");
        Ok(())
    }
}
