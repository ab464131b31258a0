//! `culina ingredients` / `culina mood` - suggestion searches
//!
//! Both modes print a numbered list of recipe names; `--full N` chains the
//! Nth suggestion into a by-name search, the CLI equivalent of clicking a
//! suggestion.

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::info;

use culina_store::RecipeBook;

use crate::cli::OutputFormat;
use crate::commands::recipe;
use crate::session::{SearchOutcome, SearchSession, SearchState};

/// Which suggestion query to run.
#[derive(Debug, Clone, Copy)]
pub enum SuggestMode {
    Ingredients,
    Mood,
}

/// Run a suggestion search and print the results.
pub async fn execute(
    session: &mut SearchSession,
    book: &mut RecipeBook,
    mode: SuggestMode,
    query: &str,
    full: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let state = match mode {
        SuggestMode::Ingredients => {
            info!(ingredients = %query, "searching by ingredients");
            session.search_by_ingredients(query).await
        }
        SuggestMode::Mood => {
            info!(mood = %query, "searching by mood");
            session.search_by_mood(query).await
        }
    };

    let suggestions = match state {
        SearchState::Ready(SearchOutcome::Suggestions(names)) => names.clone(),
        SearchState::Failed(message) => bail!("{message}"),
        other => bail!("unexpected search state: {other:?}"),
    };

    if suggestions.is_empty() {
        println!("No suggestions this time. Try a different query.");
        return Ok(());
    }

    println!("{}", "How about one of these?".bold());
    for (index, name) in suggestions.iter().enumerate() {
        println!("  {}. {}", index + 1, name);
    }

    match full {
        Some(n) => {
            let Some(name) = n.checked_sub(1).and_then(|i| suggestions.get(i)) else {
                bail!(
                    "--full {n} is out of range; there are {} suggestions",
                    suggestions.len()
                );
            };
            let name = name.clone();
            println!();
            recipe::execute(session, book, &name, false, format).await
        }
        None => {
            println!(
                "\nRun {} for the full guide.",
                "culina recipe \"<name>\"".bold()
            );
            Ok(())
        }
    }
}
