//! The persisted recipe record

use serde::{Deserialize, Serialize};

use crate::identity::{extract_recipe_name, recipe_id};

/// A saved recipe: a stable identity plus the full Markdown text the
/// assistant produced.
///
/// `id` is always derived from `name` (see [`recipe_id`]); two recipes whose
/// names normalize to the same slug are treated as the same recipe by the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Normalized slug derived from the display name, unique within a store
    pub id: String,
    /// Human-readable dish name, extracted from the Markdown title line
    pub name: String,
    /// Full raw Markdown content as returned by the provider
    pub content: String,
}

impl Recipe {
    /// Create a recipe from raw Markdown, deriving name and id from its
    /// title line.
    pub fn from_markdown(content: impl Into<String>) -> Self {
        let content = content.into();
        let name = extract_recipe_name(&content);
        let id = recipe_id(&name);
        Self { id, name, content }
    }

    /// Create a recipe from explicit parts. The id is re-derived from the
    /// name so the identity invariant cannot be bypassed.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let id = recipe_id(&name);
        Self {
            id,
            name,
            content: content.into(),
        }
    }
}
