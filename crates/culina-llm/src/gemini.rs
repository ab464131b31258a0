//! Google Gemini recipe provider
//!
//! Thin wrapper over the `generateContent` endpoint. Full recipes use the
//! recipe model with the chef system instruction; suggestion queries use
//! the (cheaper) suggestion model with a JSON response schema, and the
//! returned payload is re-parsed into a typed struct rather than trusted
//! at point of use.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use culina_core::{ProviderError, ProviderResult, RecipeProvider};

use crate::prompt;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_RECIPE_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_SUGGESTION_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Gemini provider configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, usually taken from `GEMINI_API_KEY`
    pub api_key: String,
    /// API base URL; overridable for tests and proxies
    pub base_url: String,
    /// Model used for full recipe generation
    pub recipe_model: String,
    /// Model used for suggestion queries
    pub suggestion_model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Config with default endpoint and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            recipe_model: DEFAULT_RECIPE_MODEL.to_string(),
            suggestion_model: DEFAULT_SUGGESTION_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Recipe provider backed by the Gemini API
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a provider from configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// JSON response schema for suggestion queries, enforced by the
    /// collaborator: an object with one `recipes` array of names.
    fn suggestions_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "recipes": {
                    "type": "ARRAY",
                    "description": "A list of suggested recipe names.",
                    "items": {
                        "type": "STRING",
                        "description": "The name of a suggested recipe."
                    }
                }
            },
            "required": ["recipes"]
        })
    }

    /// POST one `generateContent` request and return the concatenated text
    /// of the first candidate.
    async fn generate_content(
        &self,
        model: &str,
        request: serde_json::Value,
    ) -> ProviderResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        );
        debug!(%model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::InvalidResponse(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let candidate = body
            .candidates
            .first()
            .ok_or_else(|| ProviderError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "Candidate contained no text".to_string(),
            ));
        }
        Ok(text)
    }

    /// One suggestion round trip: schema-constrained request, then a typed
    /// parse of the JSON payload the model returned.
    async fn suggest(&self, contents: String) -> ProviderResult<Vec<String>> {
        let request = serde_json::json!({
            "contents": [{ "parts": [{ "text": contents }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::suggestions_schema(),
            },
        });

        let text = self
            .generate_content(&self.config.suggestion_model, request)
            .await?;
        let payload: SuggestionPayload = serde_json::from_str(text.trim()).map_err(|e| {
            ProviderError::InvalidResponse(format!("Malformed suggestion payload: {e}"))
        })?;
        debug!(count = payload.recipes.len(), "received suggestions");
        Ok(payload.recipes)
    }
}

#[async_trait]
impl RecipeProvider for GeminiProvider {
    async fn recipe_by_name(&self, dish: &str) -> ProviderResult<String> {
        let request = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt::recipe_prompt(dish) }] }],
            "systemInstruction": { "parts": [{ "text": prompt::CHEF_SYSTEM_INSTRUCTION }] },
        });
        self.generate_content(&self.config.recipe_model, request)
            .await
    }

    async fn suggest_by_ingredients(&self, ingredients: &str) -> ProviderResult<Vec<String>> {
        self.suggest(prompt::ingredients_prompt(ingredients)).await
    }

    async fn suggest_by_mood(&self, mood: &str) -> ProviderResult<Vec<String>> {
        self.suggest(prompt::mood_prompt(mood)).await
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

// Gemini API response types
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Typed shape of the suggestion payload; anything else is a malformed
/// response, never silently used.
#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    recipes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_the_published_models() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.recipe_model, "gemini-2.5-pro");
        assert_eq!(config.suggestion_model, "gemini-2.5-flash");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn suggestion_schema_requires_the_recipes_field() {
        let schema = GeminiProvider::suggestions_schema();
        assert_eq!(schema["required"][0], "recipes");
        assert_eq!(schema["properties"]["recipes"]["type"], "ARRAY");
    }

    #[test]
    fn suggestion_payload_parses_ordered_names() {
        let payload: SuggestionPayload = serde_json::from_str(
            r#"{"recipes":["Thai Basil Chicken","Pad Thai","Green Curry"]}"#,
        )
        .unwrap();
        assert_eq!(
            payload.recipes,
            vec!["Thai Basil Chicken", "Pad Thai", "Green Curry"]
        );
    }
}
