//! Line classification and block assembly
//!
//! Each input line is escaped, has its `**bold**` spans substituted, and is
//! then dispatched on its marker. At most one list container is open at a
//! time; headings, paragraphs, blank lines, and container switches all close
//! it before anything else is emitted.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span regex"));

static ORDERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("ordered marker regex"));

/// One block-level element of rendered output.
///
/// Text payloads are HTML fragments: already escaped, with bold spans
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `##` (level 2) or `###` (level 3) heading
    Heading { level: u8, html: String },
    /// Any non-blank line without a recognized marker
    Paragraph(String),
    /// Consecutive `1.`-style items
    OrderedList(Vec<String>),
    /// Consecutive `* ` or `- ` items
    UnorderedList(Vec<String>),
}

enum OpenList {
    Ordered(Vec<String>),
    Unordered(Vec<String>),
}

/// Parse recipe Markdown into a flat sequence of blocks, in input order.
///
/// No nested lists, no links or images; malformed markers (`1)` instead of
/// `1.`, `*item` without a space) fall through to paragraph handling.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open_list: Option<OpenList> = None;

    let close_list = |open_list: &mut Option<OpenList>, blocks: &mut Vec<Block>| {
        match open_list.take() {
            Some(OpenList::Ordered(items)) => blocks.push(Block::OrderedList(items)),
            Some(OpenList::Unordered(items)) => blocks.push(Block::UnorderedList(items)),
            None => {}
        }
    };

    for line in markdown.lines() {
        let processed = substitute_bold(&escape_html(line));

        if let Some(text) = processed.strip_prefix("## ") {
            close_list(&mut open_list, &mut blocks);
            blocks.push(Block::Heading {
                level: 2,
                html: text.to_string(),
            });
        } else if let Some(text) = processed.strip_prefix("### ") {
            close_list(&mut open_list, &mut blocks);
            blocks.push(Block::Heading {
                level: 3,
                html: text.to_string(),
            });
        } else if let Some(m) = ORDERED_MARKER_REGEX.find(&processed) {
            let item = processed[m.end()..].to_string();
            match &mut open_list {
                Some(OpenList::Ordered(items)) => items.push(item),
                _ => {
                    close_list(&mut open_list, &mut blocks);
                    open_list = Some(OpenList::Ordered(vec![item]));
                }
            }
        } else if processed.starts_with("* ") || processed.starts_with("- ") {
            let item = processed[2..].to_string();
            match &mut open_list {
                Some(OpenList::Unordered(items)) => items.push(item),
                _ => {
                    close_list(&mut open_list, &mut blocks);
                    open_list = Some(OpenList::Unordered(vec![item]));
                }
            }
        } else {
            close_list(&mut open_list, &mut blocks);
            if !processed.trim().is_empty() {
                blocks.push(Block::Paragraph(processed));
            }
        }
    }

    close_list(&mut open_list, &mut blocks);
    blocks
}

/// Replace every non-greedy `**text**` pair with `<strong>text</strong>`.
fn substitute_bold(line: &str) -> String {
    BOLD_REGEX.replace_all(line, "<strong>$1</strong>").into_owned()
}

/// Escape the HTML-significant characters of a source line.
fn escape_html(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(blocks: &[Block]) -> usize {
        blocks
            .iter()
            .filter(|b| matches!(b, Block::Paragraph(_)))
            .count()
    }

    #[test]
    fn plain_text_produces_one_paragraph_per_non_blank_line() {
        let blocks = parse_blocks("first line\n\nsecond line\nthird line\n");
        assert_eq!(blocks.len(), 3);
        assert_eq!(paragraphs(&blocks), 3);
        assert_eq!(blocks[0], Block::Paragraph("first line".to_string()));
        assert_eq!(blocks[2], Block::Paragraph("third line".to_string()));
    }

    #[test]
    fn trailing_list_is_closed_at_end_of_input() {
        let blocks = parse_blocks("1. one\n2. two");
        assert_eq!(
            blocks,
            vec![Block::OrderedList(vec!["one".to_string(), "two".to_string()])]
        );
    }

    #[test]
    fn switching_item_types_closes_the_previous_container() {
        let blocks = parse_blocks("1. first\n* bullet\n2. second");
        assert_eq!(
            blocks,
            vec![
                Block::OrderedList(vec!["first".to_string()]),
                Block::UnorderedList(vec!["bullet".to_string()]),
                Block::OrderedList(vec!["second".to_string()]),
            ]
        );
    }

    #[test]
    fn dash_and_star_items_share_one_container() {
        let blocks = parse_blocks("* one\n- two");
        assert_eq!(
            blocks,
            vec![Block::UnorderedList(vec!["one".to_string(), "two".to_string()])]
        );
    }

    #[test]
    fn heading_inside_a_list_terminates_it() {
        let blocks = parse_blocks("* one\n### Section\n* two");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList(vec!["one".to_string()]),
                Block::Heading {
                    level: 3,
                    html: "Section".to_string()
                },
                Block::UnorderedList(vec!["two".to_string()]),
            ]
        );
    }

    #[test]
    fn blank_line_closes_a_list_and_emits_nothing() {
        let blocks = parse_blocks("* one\n\n* two");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList(vec!["one".to_string()]),
                Block::UnorderedList(vec!["two".to_string()]),
            ]
        );
    }

    #[test]
    fn malformed_markers_fall_through_to_paragraphs() {
        let blocks = parse_blocks("1) not a list\n*no space\n##no space");
        assert_eq!(blocks.len(), 3);
        assert_eq!(paragraphs(&blocks), 3);
    }

    #[test]
    fn multiple_bold_spans_per_line_are_all_substituted() {
        assert_eq!(
            substitute_bold("use **cold** butter and **fresh** thyme"),
            "use <strong>cold</strong> butter and <strong>fresh</strong> thyme"
        );
    }

    #[test]
    fn bold_substitution_is_non_greedy() {
        assert_eq!(
            substitute_bold("**a** middle **b**"),
            "<strong>a</strong> middle <strong>b</strong>"
        );
    }

    #[test]
    fn bold_applies_before_dispatch_so_headings_keep_spans() {
        let blocks = parse_blocks("## A **Bold** Title");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 2,
                html: "A <strong>Bold</strong> Title".to_string()
            }]
        );
    }

    #[test]
    fn escapes_html_significant_characters() {
        assert_eq!(
            escape_html(r#"<script>"x" & 'y'</script>"#),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn escaping_happens_before_bold_substitution() {
        let blocks = parse_blocks("**<b>**");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("<strong>&lt;b&gt;</strong>".to_string())]
        );
    }
}
