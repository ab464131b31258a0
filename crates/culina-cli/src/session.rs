//! Search orchestration
//!
//! One [`SearchSession`] mediates between the three query modes and the
//! provider. Every search follows the same contract: clear prior results,
//! enter the loading state, make exactly one provider call, and settle into
//! either a payload or a human-readable error with loading cleared.
//!
//! Overlapping searches are resolved with a generation token: each search
//! takes a fresh generation when it begins, and only the result carrying
//! the latest generation is applied. Results from superseded searches are
//! discarded on arrival rather than racing for the visible state.

use std::sync::Arc;
use tracing::{debug, error};

use culina_core::{ProviderError, RecipeProvider};

/// User-facing failure messages, one per query mode.
pub const RECIPE_FAILED: &str =
    "Failed to fetch recipe. The culinary AI might be busy. Please try again.";
pub const INGREDIENTS_FAILED: &str =
    "Failed to get suggestions. The culinary AI is stumped. Please check your ingredients and try again.";
pub const MOOD_FAILED: &str =
    "Failed to get suggestions for that mood. The culinary AI is feeling uninspired. Please try again.";

/// Successful payload of a settled search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Full recipe Markdown from a by-name search
    Recipe(String),
    /// Ordered recipe names from an ingredients or mood search
    Suggestions(Vec<String>),
}

/// Observable state of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run, or results were cleared
    Idle,
    /// A search is in flight
    Loading,
    /// The latest search settled successfully
    Ready(SearchOutcome),
    /// The latest search failed; the message is user-facing
    Failed(String),
}

/// Orchestrator for the three search modes.
pub struct SearchSession {
    provider: Arc<dyn RecipeProvider>,
    state: SearchState,
    generation: u64,
}

impl SearchSession {
    /// Create an idle session over the given provider.
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self {
            provider,
            state: SearchState::Idle,
            generation: 0,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Clear any prior result or error.
    pub fn clear(&mut self) {
        self.state = SearchState::Idle;
    }

    /// Start a new search: clears results, enters loading, and issues the
    /// generation token the eventual result must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = SearchState::Loading;
        self.generation
    }

    /// Apply a settled result if it belongs to the latest search.
    ///
    /// Returns whether the result was applied; a stale generation is
    /// discarded without touching the visible state.
    pub fn settle(&mut self, generation: u64, result: Result<SearchOutcome, String>) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "discarding stale search result");
            return false;
        }
        self.state = match result {
            Ok(outcome) => SearchState::Ready(outcome),
            Err(message) => SearchState::Failed(message),
        };
        true
    }

    /// Search for a full recipe by dish name.
    pub async fn search_by_name(&mut self, dish: &str) -> &SearchState {
        let generation = self.begin();
        let result = self
            .provider
            .recipe_by_name(dish)
            .await
            .map(SearchOutcome::Recipe)
            .map_err(|e| user_message(e, RECIPE_FAILED));
        self.settle(generation, result);
        &self.state
    }

    /// Search for suggestions from an ingredient list.
    pub async fn search_by_ingredients(&mut self, ingredients: &str) -> &SearchState {
        let generation = self.begin();
        let result = self
            .provider
            .suggest_by_ingredients(ingredients)
            .await
            .map(SearchOutcome::Suggestions)
            .map_err(|e| user_message(e, INGREDIENTS_FAILED));
        self.settle(generation, result);
        &self.state
    }

    /// Search for suggestions from a mood.
    pub async fn search_by_mood(&mut self, mood: &str) -> &SearchState {
        let generation = self.begin();
        let result = self
            .provider
            .suggest_by_mood(mood)
            .await
            .map(SearchOutcome::Suggestions)
            .map_err(|e| user_message(e, MOOD_FAILED));
        self.settle(generation, result);
        &self.state
    }
}

/// Log the provider failure in full, surface the fixed per-mode message.
fn user_message(error: ProviderError, message: &str) -> String {
    error!("provider call failed: {error}");
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use culina_llm::MockRecipeProvider;

    fn session_with(provider: MockRecipeProvider) -> SearchSession {
        SearchSession::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn by_name_settles_into_a_recipe() {
        let provider = MockRecipeProvider::new();
        provider.set_recipe("## Pad Thai\n\n1. Soak noodles.");
        let mut session = session_with(provider);

        match session.search_by_name("Pad Thai").await {
            SearchState::Ready(SearchOutcome::Recipe(markdown)) => {
                assert!(markdown.starts_with("## Pad Thai"));
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_surfaces_the_fixed_message_and_clears_loading() {
        let provider = MockRecipeProvider::new();
        provider.fail_with("socket closed");
        let mut session = session_with(provider);

        assert_eq!(
            session.search_by_name("Pad Thai").await,
            &SearchState::Failed(RECIPE_FAILED.to_string())
        );

        let mut session2 = SearchSession::new(Arc::new({
            let p = MockRecipeProvider::new();
            p.fail_with("quota");
            p
        }));
        assert_eq!(
            session2.search_by_mood("Indulgent").await,
            &SearchState::Failed(MOOD_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn suggestions_preserve_provider_order() {
        let provider = MockRecipeProvider::new();
        provider.set_suggestions(vec![
            "Thai Basil Chicken".to_string(),
            "Pad Thai".to_string(),
            "Green Curry".to_string(),
        ]);
        let mut session = session_with(provider);

        match session.search_by_ingredients("chicken, basil").await {
            SearchState::Ready(SearchOutcome::Suggestions(names)) => {
                assert_eq!(names, &["Thai Basil Chicken", "Pad Thai", "Green Curry"]);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut session = session_with(MockRecipeProvider::new());

        let first = session.begin();
        let second = session.begin();

        // The newer search settles first and wins.
        assert!(session.settle(
            second,
            Ok(SearchOutcome::Recipe("## Newer".to_string()))
        ));
        // The superseded search arrives late and is ignored.
        assert!(!session.settle(
            first,
            Ok(SearchOutcome::Recipe("## Older".to_string()))
        ));

        assert_eq!(
            session.state(),
            &SearchState::Ready(SearchOutcome::Recipe("## Newer".to_string()))
        );
    }

    #[test]
    fn begin_clears_prior_results() {
        let mut session = session_with(MockRecipeProvider::new());
        let generation = session.begin();
        session.settle(generation, Err("boom".to_string()));
        assert!(matches!(session.state(), SearchState::Failed(_)));

        session.begin();
        assert_eq!(session.state(), &SearchState::Loading);
    }
}
