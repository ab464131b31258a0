//! Mock recipe provider for testing

use async_trait::async_trait;
use std::sync::Mutex;

use culina_core::{ProviderError, ProviderResult, RecipeProvider};

/// Canned-response provider. Returns a configurable recipe and suggestion
/// list, or a configured error, without any network access.
#[derive(Debug)]
pub struct MockRecipeProvider {
    recipe: Mutex<Result<String, String>>,
    suggestions: Mutex<Result<Vec<String>, String>>,
}

impl MockRecipeProvider {
    /// Provider that answers every query successfully with defaults.
    pub fn new() -> Self {
        Self {
            recipe: Mutex::new(Ok(
                "## Mock Dish\n\nA dish from the test kitchen.\n### The Culinary Journey (Instructions)\n1. Combine.\n2. Serve.".to_string(),
            )),
            suggestions: Mutex::new(Ok(vec![
                "Mock Dish".to_string(),
                "Second Mock Dish".to_string(),
            ])),
        }
    }

    /// Set the recipe text returned by `recipe_by_name`.
    pub fn set_recipe(&self, markdown: impl Into<String>) {
        *self.recipe.lock().unwrap_or_else(|e| e.into_inner()) = Ok(markdown.into());
    }

    /// Set the names returned by both suggestion modes.
    pub fn set_suggestions(&self, names: Vec<String>) {
        *self.suggestions.lock().unwrap_or_else(|e| e.into_inner()) = Ok(names);
    }

    /// Make every query fail with this message.
    pub fn fail_with(&self, message: impl Into<String>) {
        let message = message.into();
        *self.recipe.lock().unwrap_or_else(|e| e.into_inner()) = Err(message.clone());
        *self.suggestions.lock().unwrap_or_else(|e| e.into_inner()) = Err(message);
    }
}

impl Default for MockRecipeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    async fn recipe_by_name(&self, _dish: &str) -> ProviderResult<String> {
        self.recipe
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .map_err(ProviderError::Http)
    }

    async fn suggest_by_ingredients(&self, _ingredients: &str) -> ProviderResult<Vec<String>> {
        self.suggestions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .map_err(ProviderError::Http)
    }

    async fn suggest_by_mood(&self, _mood: &str) -> ProviderResult<Vec<String>> {
        self.suggestions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .map_err(ProviderError::Http)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
