//! Durable storage abstraction
//!
//! The saved-recipes collection lives under one well-known key as a single
//! JSON blob. The interface is deliberately narrow (read/write of that blob)
//! so any durable backend can stand in: a file, an embedded database, or a
//! remote API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Well-known key for the saved-recipes collection
pub const SAVED_RECIPES_KEY: &str = "culina_saved_recipes";

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value blob storage for the saved-recipes collection.
///
/// Single active writer assumed; no locking is provided. Reads and writes
/// cover the whole blob, never a partial update.
#[async_trait]
pub trait RecipeStorage: Send + Sync {
    /// Read the blob stored under `key`, or `None` if the key is absent.
    async fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the blob stored under `key`.
    async fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}
