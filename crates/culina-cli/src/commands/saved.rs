//! `culina saved` - the saved-recipes book

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::info;

use culina_store::RecipeBook;

use crate::cli::OutputFormat;
use crate::commands::format_recipe;

/// List saved recipes in insertion order.
pub fn list(book: &RecipeBook) {
    if book.recipes().is_empty() {
        println!("No saved recipes yet. Start searching to save your favorites here!");
        return;
    }
    for recipe in book.recipes() {
        println!("{:<32} {}", recipe.id.bold(), recipe.name);
    }
}

/// Print one saved recipe.
pub fn view(book: &RecipeBook, id: &str, format: OutputFormat) -> Result<()> {
    match book.get(id) {
        Some(recipe) => {
            println!("{}", format_recipe(&recipe.content, format));
            Ok(())
        }
        None => bail!("no saved recipe with id '{id}'"),
    }
}

/// Delete one saved recipe. Deleting an unknown id is reported, not an
/// error, matching the store's no-op semantics.
pub async fn delete(book: &mut RecipeBook, id: &str) -> Result<()> {
    if book.remove(id).await? {
        info!(%id, "deleted saved recipe");
        println!("{} deleted {}", "✓".green(), id.bold());
    } else {
        println!("no saved recipe with id '{id}'");
    }
    Ok(())
}
