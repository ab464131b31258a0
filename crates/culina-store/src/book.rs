//! The saved-recipes repository

use std::sync::Arc;
use tracing::{debug, warn};

use culina_core::{Recipe, RecipeStorage, StorageResult, SAVED_RECIPES_KEY};

/// Insertion-ordered collection of saved recipes, unique by id, persisted
/// as one JSON blob under [`SAVED_RECIPES_KEY`].
///
/// Loaded once at startup; every mutation rewrites the full blob. Single
/// active writer assumed.
pub struct RecipeBook {
    storage: Arc<dyn RecipeStorage>,
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Load the collection from storage.
    ///
    /// An absent key yields an empty collection. So does a blob that fails
    /// to parse: the corruption is logged at `warn` and the caller starts
    /// fresh rather than failing.
    pub async fn load(storage: Arc<dyn RecipeStorage>) -> StorageResult<Self> {
        let recipes = match storage.read(SAVED_RECIPES_KEY).await? {
            Some(blob) => match serde_json::from_str::<Vec<Recipe>>(&blob) {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!("saved recipes blob failed to parse, starting empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(count = recipes.len(), "loaded saved recipes");
        Ok(Self { storage, recipes })
    }

    /// The saved recipes, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Whether a recipe with this id is already saved.
    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    /// Look up a saved recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Append a recipe and persist the collection.
    ///
    /// Idempotent: if the id is already present the collection is left
    /// untouched, nothing is written, and `Ok(false)` is returned.
    pub async fn add(&mut self, recipe: Recipe) -> StorageResult<bool> {
        if self.contains(&recipe.id) {
            debug!(id = %recipe.id, "recipe already saved, skipping");
            return Ok(false);
        }
        self.recipes.push(recipe);
        self.persist().await?;
        Ok(true)
    }

    /// Remove the recipe with this id and persist the collection.
    ///
    /// A missing id is a no-op, not an error: nothing is written and
    /// `Ok(false)` is returned.
    pub async fn remove(&mut self, id: &str) -> StorageResult<bool> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Serialize the full collection and replace the stored blob.
    async fn persist(&self) -> StorageResult<()> {
        let blob = serde_json::to_string(&self.recipes)
            .map_err(|e| culina_core::StorageError::Serialization(e.to_string()))?;
        self.storage.write(SAVED_RECIPES_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn recipe(name: &str) -> Recipe {
        Recipe::new(name, format!("## {name}\n\nA fine dish."))
    }

    #[tokio::test]
    async fn loads_empty_when_key_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        let book = RecipeBook::load(storage).await.unwrap();
        assert!(book.recipes().is_empty());
    }

    #[tokio::test]
    async fn corrupt_blob_loads_as_empty_collection() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(SAVED_RECIPES_KEY, "{not json at all")
            .await
            .unwrap();
        let book = RecipeBook::load(storage).await.unwrap();
        assert!(book.recipes().is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_blob_loads_as_empty_collection() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(SAVED_RECIPES_KEY, r#"{"id":"x"}"#)
            .await
            .unwrap();
        let book = RecipeBook::load(storage).await.unwrap();
        assert!(book.recipes().is_empty());
    }

    #[tokio::test]
    async fn add_is_idempotent_on_colliding_ids() {
        let storage = Arc::new(MemoryStorage::new());
        let mut book = RecipeBook::load(storage).await.unwrap();

        assert!(book.add(recipe("Pad Thai")).await.unwrap());
        // "pad   thai!" derives the same id
        assert!(!book.add(recipe("pad   thai!")).await.unwrap());

        assert_eq!(book.recipes().len(), 1);
        assert_eq!(book.recipes()[0].name, "Pad Thai");
    }

    #[tokio::test]
    async fn remove_of_missing_id_leaves_collection_unchanged() {
        let storage = Arc::new(MemoryStorage::new());
        let mut book = RecipeBook::load(storage).await.unwrap();
        book.add(recipe("Green Curry")).await.unwrap();

        assert!(!book.remove("no-such-id").await.unwrap());
        assert_eq!(book.recipes().len(), 1);

        assert!(book.remove("green-curry").await.unwrap());
        assert!(book.recipes().is_empty());
    }

    #[tokio::test]
    async fn mutations_round_trip_through_storage() {
        let storage = Arc::new(MemoryStorage::new());

        let mut book = RecipeBook::load(storage.clone()).await.unwrap();
        book.add(recipe("Pad Thai")).await.unwrap();
        book.add(recipe("Green Curry")).await.unwrap();
        book.add(recipe("Thai Basil Chicken")).await.unwrap();
        book.remove("green-curry").await.unwrap();

        let reloaded = RecipeBook::load(storage).await.unwrap();
        let ids: Vec<&str> = reloaded.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["pad-thai", "thai-basil-chicken"]);
        assert_eq!(reloaded.recipes(), book.recipes());
    }

    #[tokio::test]
    async fn get_and_contains_resolve_by_id() {
        let storage = Arc::new(MemoryStorage::new());
        let mut book = RecipeBook::load(storage).await.unwrap();
        book.add(recipe("Pad Thai")).await.unwrap();

        assert!(book.contains("pad-thai"));
        assert!(!book.contains("green-curry"));
        assert_eq!(book.get("pad-thai").unwrap().name, "Pad Thai");
    }
}
