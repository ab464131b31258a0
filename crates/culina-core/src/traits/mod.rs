//! Collaborator traits
//!
//! Core defines the boundaries to the two external collaborators (the
//! generative-AI service and durable storage); implementations live in the
//! `culina-llm` and `culina-store` crates and are injected by callers.

pub mod provider;
pub mod storage;

pub use provider::{ProviderError, ProviderResult, RecipeProvider};
pub use storage::{RecipeStorage, StorageError, StorageResult, SAVED_RECIPES_KEY};
