//! Recipe identity resolution
//!
//! A recipe's display name is the text of the first `##` title line in its
//! Markdown; its id is a deterministic slug of that name. Both functions are
//! pure, so the same content always resolves to the same identity.

use regex::Regex;
use std::sync::LazyLock;

/// Fallback display name for recipe text with no `##` title line.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s*(.*)").expect("recipe title regex"));

/// Extract the display name from recipe Markdown.
///
/// Returns the captured text of the first line matching `^##\s*(.*)`,
/// trimmed. Missing title lines are never an error; they downgrade to
/// [`UNTITLED_RECIPE`].
pub fn extract_recipe_name(markdown: &str) -> String {
    TITLE_REGEX
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNTITLED_RECIPE.to_string())
}

/// Derive the stable id for a recipe name.
///
/// Lowercases, collapses each whitespace run to a single hyphen, then strips
/// every character outside `[a-z0-9-]`. Idempotent under re-derivation.
pub fn recipe_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut id = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                id.push(ch);
            }
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_from_first_h2_line() {
        let markdown = "## Exquisite Lemon Butter Chicken\n\nA bright, silky classic.";
        assert_eq!(extract_recipe_name(markdown), "Exquisite Lemon Butter Chicken");
    }

    #[test]
    fn skips_leading_non_title_lines() {
        let markdown = "A word from the chef.\n## Pad Thai\n### The Pantry List";
        assert_eq!(extract_recipe_name(markdown), "Pad Thai");
    }

    #[test]
    fn falls_back_when_no_title_line_exists() {
        assert_eq!(extract_recipe_name("just some text"), UNTITLED_RECIPE);
        assert_eq!(extract_recipe_name(""), UNTITLED_RECIPE);
    }

    #[test]
    fn collapses_whitespace_runs_to_single_hyphens() {
        assert_eq!(recipe_id("Lemon   Butter Chicken"), "lemon-butter-chicken");
        assert_eq!(recipe_id("Lemon\t \tButter"), "lemon-butter");
    }

    #[test]
    fn strips_characters_outside_slug_alphabet() {
        assert_eq!(recipe_id("pad   thai!"), "pad-thai");
        assert_eq!(recipe_id("Crème Brûlée"), "crme-brle");
        assert_eq!(recipe_id("5-Spice Duck"), "5-spice-duck");
    }

    #[test]
    fn derivation_is_idempotent() {
        let once = recipe_id("Thai Basil Chicken");
        assert_eq!(recipe_id(&once), once);
    }

    #[test]
    fn colliding_names_share_an_id() {
        assert_eq!(recipe_id("Pad Thai"), recipe_id("pad   thai!"));
    }
}
