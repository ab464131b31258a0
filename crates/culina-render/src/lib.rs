//! # Culina Render
//!
//! Converts the constrained Markdown dialect the recipe provider emits
//! (`##`/`###` headings, `**bold**`, ordered/unordered lists, paragraphs)
//! into a flat sequence of HTML block elements.
//!
//! The conversion is line-oriented and pure: the only state is the one list
//! container that may be open at a time, and it never outlives a call.
//! Source text is HTML-escaped before any markup substitution, so raw HTML
//! in provider output renders as text instead of entering the render tree.

#![warn(clippy::all)]

mod blocks;

pub use blocks::{parse_blocks, Block};

/// Render recipe Markdown to an HTML fragment.
///
/// Empty input yields an empty string; rendering never fails. Output is a
/// flat sequence of `<h2>`, `<h3>`, `<ol>`, `<ul>`, and `<p>` elements in
/// input order, with no nested lists.
pub fn render_html(markdown: &str) -> String {
    let mut html = String::new();
    for block in parse_blocks(markdown) {
        match block {
            Block::Heading { level, html: text } => {
                html.push_str(&format!("<h{level}>{text}</h{level}>"));
            }
            Block::Paragraph(text) => {
                html.push_str(&format!("<p>{text}</p>"));
            }
            Block::OrderedList(items) => {
                html.push_str("<ol>");
                for item in items {
                    html.push_str(&format!("<li>{item}</li>"));
                }
                html.push_str("</ol>");
            }
            Block::UnorderedList(items) => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str(&format!("<li>{item}</li>"));
                }
                html.push_str("</ul>");
            }
        }
    }
    html
}
