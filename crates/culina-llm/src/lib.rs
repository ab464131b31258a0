//! # Culina LLM
//!
//! Generative-AI collaborator implementations for Culina.
//!
//! ## Modules
//!
//! - [`gemini`]: Google Gemini `generateContent` provider
//! - [`prompt`]: the chef system instruction and per-mode prompt builders
//! - [`mock`]: canned-response provider for tests and offline use
//!
//! ## Example
//!
//! ```rust,no_run
//! use culina_llm::{create_provider, GeminiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeminiConfig::new(std::env::var("GEMINI_API_KEY")?);
//!     let provider = create_provider(config)?;
//!     let recipe = provider.recipe_by_name("Pad Thai").await?;
//!     println!("{recipe}");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod gemini;
pub mod mock;
pub mod prompt;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockRecipeProvider;

use std::sync::Arc;

use culina_core::{ProviderError, ProviderResult, RecipeProvider};

/// Create a recipe provider from configuration.
///
/// Validates the configuration before constructing the provider.
pub fn create_provider(config: GeminiConfig) -> ProviderResult<Arc<dyn RecipeProvider>> {
    if config.api_key.trim().is_empty() {
        return Err(ProviderError::Config(
            "Gemini API key is not set (GEMINI_API_KEY)".to_string(),
        ));
    }
    Ok(Arc::new(GeminiProvider::new(config)))
}
