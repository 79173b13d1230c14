//! HTML DOM → document tree construction.
//!
//! The markdown parser hands us an HTML string; this module re-parses it
//! with html5ever into an rcdom tree and maps elements onto [`NodeKind`]s.
//! html5ever is browser-grade and handles malformed markup gracefully, so
//! the mapping never has to defend against unclosed tags.
//!
//! Whitespace follows HTML semantics: inline text collapses runs of
//! whitespace to a single space, whitespace-only text between block
//! elements is dropped, and `<pre>` content is taken verbatim.

use crate::error::FormatError;
use crate::tree::nodes::{DocumentNode, NodeKind};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment into the document tree.
pub fn html_to_tree(html: &str) -> Result<DocumentNode, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let body = find_body(&dom.document)
        .ok_or_else(|| FormatError::ParseError("no <body> in parser output".to_string()))?;
    Ok(DocumentNode::root(convert_children(&body, false)))
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == "body" {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_body(child) {
            return Some(found);
        }
    }
    None
}

/// Convert the children of a DOM node. `inline` marks text-flow context,
/// where whitespace-only text nodes are meaningful separators.
fn convert_children(handle: &Handle, inline: bool) -> Vec<DocumentNode> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let collapsed = collapse_whitespace(&contents.borrow());
                if inline {
                    if !collapsed.is_empty() {
                        nodes.push(DocumentNode::text(collapsed));
                    }
                } else if !collapsed.trim().is_empty() {
                    nodes.push(DocumentNode::text(collapsed));
                }
            }
            NodeData::Element { name, .. } => {
                nodes.push(convert_element(child, name.local.as_ref(), inline));
            }
            _ => {}
        }
    }
    nodes
}

fn convert_element(handle: &Handle, tag: &str, inline: bool) -> DocumentNode {
    match tag {
        "h1" => DocumentNode::new(NodeKind::Heading(1), convert_children(handle, true)),
        "h2" => DocumentNode::new(NodeKind::Heading(2), convert_children(handle, true)),
        "h3" => DocumentNode::new(NodeKind::Heading(3), convert_children(handle, true)),
        "p" => DocumentNode::new(NodeKind::Paragraph, convert_children(handle, true)),
        "strong" | "b" => DocumentNode::new(NodeKind::Bold, convert_children(handle, true)),
        "em" | "i" => DocumentNode::new(NodeKind::Italic, convert_children(handle, true)),
        "ul" => DocumentNode::new(NodeKind::UnorderedList, convert_children(handle, false)),
        "ol" => DocumentNode::new(NodeKind::OrderedList, convert_children(handle, false)),
        "li" => DocumentNode::new(NodeKind::ListItem, convert_children(handle, true)),
        "pre" => DocumentNode::leaf(NodeKind::CodeBlock, collect_text(handle)),
        "code" => DocumentNode::leaf(NodeKind::InlineCode, collect_text(handle)),
        "blockquote" => DocumentNode::new(NodeKind::Blockquote, convert_children(handle, false)),
        "br" => DocumentNode::new(NodeKind::LineBreak, Vec::new()),
        // h4+ and anything else: children pass through, preserving flow.
        _ => DocumentNode::new(NodeKind::Other, convert_children(handle, inline)),
    }
}

/// Raw text content of a node and its descendants, no normalization.
fn collect_text(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text_into(handle, &mut text);
    text
}

fn collect_text_into(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text_into(child, out),
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}
