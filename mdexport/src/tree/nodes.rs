//! Core data structures for the intermediate document tree.

use serde::{Deserialize, Serialize};

/// Discriminant for a [`DocumentNode`].
///
/// The kind fully determines which fields of the node are meaningful:
/// leaf kinds (`Text`, `InlineCode`, `CodeBlock`) carry `text` and never
/// have children, every other kind carries children and an empty `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Text,
    /// Heading with level 1..=3. Deeper headings map to `Other`.
    Heading(u8),
    Paragraph,
    Bold,
    Italic,
    UnorderedList,
    OrderedList,
    ListItem,
    InlineCode,
    CodeBlock,
    Blockquote,
    LineBreak,
    /// Any element the model does not recognize; children pass through.
    Other,
}

impl NodeKind {
    /// Leaf kinds carry raw text and no children.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Text | NodeKind::InlineCode | NodeKind::CodeBlock
        )
    }

    pub fn is_list(self) -> bool {
        matches!(self, NodeKind::UnorderedList | NodeKind::OrderedList)
    }
}

/// A node of the format-agnostic document tree all projectors read from.
///
/// The tree is rebuilt from scratch for every conversion and is immutable
/// for the duration of one projector pass. Text payloads are raw, never
/// pre-escaped; escaping is each projector's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create a container node of the given kind.
    pub fn new(kind: NodeKind, children: Vec<DocumentNode>) -> Self {
        Self {
            kind,
            text: String::new(),
            children,
        }
    }

    /// Create a leaf node carrying raw text.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// The document root: an `Other` node whose children are the top-level
    /// blocks. `Other` concatenates children in every projector, so the
    /// root never contributes markup of its own.
    pub fn root(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Other, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_kinds_have_no_children() {
        let node = DocumentNode::text("hello");
        assert!(node.kind.is_leaf());
        assert!(node.children.is_empty());
        assert_eq!(node.text, "hello");
    }

    #[test]
    fn list_kinds() {
        assert!(NodeKind::UnorderedList.is_list());
        assert!(NodeKind::OrderedList.is_list());
        assert!(!NodeKind::ListItem.is_list());
    }
}
