//! # Culina Core
//!
//! Domain types and collaborator traits for the Culina recipe assistant.
//!
//! ## Architecture
//!
//! Core defines the interfaces; implementations live in the provider and
//! storage crates and are injected by the CLI:
//!
//! - [`Recipe`]: the persisted record of a generated dish guide
//! - [`identity`]: title extraction and slug derivation for recipe identity
//! - [`traits::RecipeProvider`]: the generative-AI collaborator boundary
//! - [`traits::RecipeStorage`]: the durable key-value storage boundary

#![warn(clippy::all)]

pub mod identity;
pub mod recipe;
pub mod traits;

pub use identity::{extract_recipe_name, recipe_id, UNTITLED_RECIPE};
pub use recipe::Recipe;
pub use traits::{
    ProviderError, ProviderResult, RecipeProvider, RecipeStorage, StorageError, StorageResult,
    SAVED_RECIPES_KEY,
};
