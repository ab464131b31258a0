//! Command implementations

pub mod recipe;
pub mod saved;
pub mod suggest;

use crate::cli::OutputFormat;

/// Format recipe Markdown for terminal output.
pub fn format_recipe(markdown: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => markdown.to_string(),
        OutputFormat::Html => culina_render::render_html(markdown),
    }
}
