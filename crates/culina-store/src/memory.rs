//! In-memory storage backend
//!
//! Backs a session that should not touch disk, and the test suites of the
//! crates that consume [`RecipeStorage`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use culina_core::{RecipeStorage, StorageResult};

/// Key-value storage held in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStorage for MemoryStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(blobs.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
