//! Plain-text format implementation
//!
//! Projects the document tree to indented, underline-styled text:
//! full-width `=`/`-` underlines for level 1/2 headings, `•` bullets and
//! zero-padded positional markers for lists, four-space indented code
//! blocks. Plain text has no escaping concern; content goes out verbatim.
//!
//! The projector normalizes its own output: the result is trimmed and any
//! run of three or more newlines collapses to exactly one blank line.

use crate::error::FormatError;
use crate::format::Format;
use crate::parser::ParsedDocument;
use crate::tree::nodes::DocumentNode;
use crate::tree::walk::{walk, NodeVisitor, WalkState};

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "txt"
    }

    fn description(&self) -> &str {
        "Plain text with underlined headings"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        Ok(to_plain_text(&doc.tree))
    }
}

/// Project a tree to plain text.
pub fn to_plain_text(tree: &DocumentNode) -> String {
    let rendered = walk(tree, &mut TextProjector);
    collapse_blank_lines(rendered.trim())
}

struct TextProjector;

impl NodeVisitor for TextProjector {
    fn heading(&mut self, level: u8, content: String, _state: &WalkState) -> String {
        match level {
            1 => format!("{content}\n{}\n\n", "=".repeat(content.chars().count())),
            2 => format!("{content}\n{}\n\n", "-".repeat(content.chars().count())),
            _ => format!("{content}\n\n"),
        }
    }

    fn paragraph(&mut self, content: String, _state: &WalkState) -> String {
        format!("{content}\n\n")
    }

    fn list(&mut self, _ordered: bool, content: String, state: &WalkState) -> String {
        if state.list_depth > 1 {
            // A sublist continues its parent item's line block.
            format!("\n{content}")
        } else {
            format!("{content}\n")
        }
    }

    fn list_item(&mut self, content: String, nested: String, state: &WalkState) -> String {
        let indent = "  ".repeat(state.list_depth.saturating_sub(1));
        let marker = if state.item_ordered {
            format!("{:02}. ", state.item_index)
        } else {
            "\u{2022} ".to_string()
        };
        let mut out = format!("{indent}{marker}{}", content.trim_end());
        if nested.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&nested);
        }
        out
    }

    fn inline_code(&mut self, code: &str, _state: &WalkState) -> String {
        format!("`{code}`")
    }

    fn code_block(&mut self, code: &str, _state: &WalkState) -> String {
        let mut out = String::new();
        for line in code.trim_end_matches('\n').lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out
    }

    fn blockquote(&mut self, content: String, _state: &WalkState) -> String {
        let mut out = String::new();
        for line in content.trim_end().lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
        out
    }
}

/// Collapse any run of 3+ newlines to exactly one blank line.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push('\n');
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::nodes::NodeKind;

    fn heading(level: u8, text: &str) -> DocumentNode {
        DocumentNode::new(NodeKind::Heading(level), vec![DocumentNode::text(text)])
    }

    #[test]
    fn heading_underline_matches_char_length() {
        let tree = DocumentNode::root(vec![heading(1, "Tïtle")]);
        assert_eq!(to_plain_text(&tree), "Tïtle\n=====");
    }

    #[test]
    fn level_three_heading_has_no_underline() {
        let tree = DocumentNode::root(vec![
            heading(3, "Small"),
            DocumentNode::new(NodeKind::Paragraph, vec![DocumentNode::text("body")]),
        ]);
        assert_eq!(to_plain_text(&tree), "Small\n\nbody");
    }

    #[test]
    fn collapse_limits_blank_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn ordered_markers_are_padded_and_positional() {
        let items: Vec<DocumentNode> = ["first", "second", "third"]
            .iter()
            .map(|t| DocumentNode::new(NodeKind::ListItem, vec![DocumentNode::text(*t)]))
            .collect();
        let tree = DocumentNode::root(vec![DocumentNode::new(NodeKind::OrderedList, items)]);
        assert_eq!(to_plain_text(&tree), "01. first\n02. second\n03. third");
    }

    #[test]
    fn nested_items_indent_two_spaces_per_level() {
        let nested = DocumentNode::new(
            NodeKind::UnorderedList,
            vec![DocumentNode::new(
                NodeKind::ListItem,
                vec![DocumentNode::text("inner")],
            )],
        );
        let tree = DocumentNode::root(vec![DocumentNode::new(
            NodeKind::UnorderedList,
            vec![DocumentNode::new(
                NodeKind::ListItem,
                vec![DocumentNode::text("outer"), nested],
            )],
        )]);
        assert_eq!(to_plain_text(&tree), "\u{2022} outer\n  \u{2022} inner");
    }

    #[test]
    fn code_block_is_indented_verbatim() {
        let tree = DocumentNode::root(vec![DocumentNode::leaf(
            NodeKind::CodeBlock,
            "fn main() {\n    run();\n}\n",
        )]);
        assert_eq!(to_plain_text(&tree), "    fn main() {\n        run();\n    }");
    }
}
