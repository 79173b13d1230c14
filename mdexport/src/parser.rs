//! Markdown front end.
//!
//! comrak renders the source to HTML with the extension set the editor
//! exposes (tables, task lists, strikethrough, autolinks, emoji
//! shortcodes; fenced code and literal mid-word underscores are CommonMark
//! defaults). The HTML is then re-parsed into the document tree, so every
//! projector reads the same structure the live preview shows.

use crate::error::FormatError;
use crate::tree::from_html::html_to_tree;
use crate::tree::nodes::DocumentNode;
use comrak::{markdown_to_html, ComrakOptions};

/// A parsed source document: the rendered HTML (used by the HTML and PDF
/// formats and the preview) and the tree the remaining projectors walk.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub html: String,
    pub tree: DocumentNode,
}

/// Render markdown to an HTML fragment.
pub fn render_html(source: &str) -> String {
    markdown_to_html(source, &parser_options())
}

/// Parse markdown into a [`ParsedDocument`]. The tree is rebuilt from
/// scratch on every call; nothing is cached between conversions.
pub fn parse(source: &str) -> Result<ParsedDocument, FormatError> {
    let html = render_html(source);
    let tree = html_to_tree(&html)?;
    Ok(ParsedDocument { html, tree })
}

fn parser_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.shortcodes = true;
    options
}
