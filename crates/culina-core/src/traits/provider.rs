//! Generative-AI collaborator abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider operation errors
///
/// Every failure is terminal for the single triggering request; nothing is
/// retried here. The CLI surfaces the message verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The generative-AI collaborator boundary.
///
/// Three query modes, one contract shape each: a free-text query in, either
/// a full Markdown recipe or a short list of recipe names out.
///
/// Implementations must be `Send + Sync` so they can be shared across async
/// boundaries behind an `Arc`.
#[async_trait]
pub trait RecipeProvider: std::fmt::Debug + Send + Sync {
    /// Generate a full recipe for a named dish.
    ///
    /// The returned text is expected (not validated) to start with a
    /// `## Title` line followed by `###` sections, lists, and paragraphs.
    async fn recipe_by_name(&self, dish: &str) -> ProviderResult<String>;

    /// Suggest up to 5 recipe names for a list of available ingredients.
    async fn suggest_by_ingredients(&self, ingredients: &str) -> ProviderResult<Vec<String>>;

    /// Suggest up to 5 recipe names for a mood or craving.
    async fn suggest_by_mood(&self, mood: &str) -> ProviderResult<Vec<String>>;

    /// Human-readable provider name for logs and diagnostics
    fn provider_name(&self) -> &str;
}
