//! `culina recipe` - full recipe by dish name

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::info;

use culina_core::Recipe;
use culina_store::RecipeBook;

use crate::cli::OutputFormat;
use crate::commands::format_recipe;
use crate::session::{SearchOutcome, SearchSession, SearchState};

/// Result of asking the book to save a recipe.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveStatus {
    /// Newly saved under this id
    Saved(String),
    /// A recipe with this id already exists; collection unchanged
    AlreadySaved(String),
}

/// Derive identity from the recipe text and save it, unless its id is
/// already present.
pub async fn save_recipe(book: &mut RecipeBook, markdown: &str) -> Result<SaveStatus> {
    let recipe = Recipe::from_markdown(markdown);
    let id = recipe.id.clone();
    if book.add(recipe).await? {
        Ok(SaveStatus::Saved(id))
    } else {
        Ok(SaveStatus::AlreadySaved(id))
    }
}

/// Fetch and print a full recipe; optionally save it.
pub async fn execute(
    session: &mut SearchSession,
    book: &mut RecipeBook,
    dish: &str,
    save: bool,
    format: OutputFormat,
) -> Result<()> {
    info!(%dish, "searching for recipe by name");

    let markdown = match session.search_by_name(dish).await {
        SearchState::Ready(SearchOutcome::Recipe(markdown)) => markdown.clone(),
        SearchState::Failed(message) => bail!("{message}"),
        other => bail!("unexpected search state: {other:?}"),
    };

    println!("{}", format_recipe(&markdown, format));

    if save {
        match save_recipe(book, &markdown).await? {
            SaveStatus::Saved(id) => {
                println!("\n{} saved as {}", "✓".green(), id.bold());
            }
            SaveStatus::AlreadySaved(id) => {
                println!("\nalready saved as {}", id.bold());
            }
        }
    } else {
        let id = culina_core::recipe_id(&culina_core::extract_recipe_name(&markdown));
        if book.contains(&id) {
            println!("\n(already saved as {})", id.bold());
        }
    }

    Ok(())
}
