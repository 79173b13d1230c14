//! Generic tree traversal shared by every projector.
//!
//! The traversal owns recursion, child joining and list bookkeeping; a
//! [`NodeVisitor`] owns only the per-kind formatting strings. Every method
//! defaults to passing the concatenated child output through, which is the
//! fallback every format needs for unrecognized kinds.
//!
//! List state is threaded through [`WalkState`] by the traversal itself:
//! projectors never count items or track nesting depth on their own, which
//! keeps all projector output a pure function of the tree.

use crate::tree::nodes::{DocumentNode, NodeKind};

/// Per-node context computed by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkState {
    /// Nesting depth of the enclosing list; 1 for items of a top-level
    /// list, 0 outside any list.
    pub list_depth: usize,
    /// 1-based positional index of the current list item, 0 outside items.
    /// Always positional, regardless of any numbering hints in the source.
    pub item_index: usize,
    /// Whether the enclosing list is ordered.
    pub item_ordered: bool,
}

/// One method per node kind. Container methods receive the already-joined
/// output of their children; leaf methods receive the raw text payload.
pub trait NodeVisitor {
    fn text(&mut self, text: &str, _state: &WalkState) -> String {
        text.to_string()
    }

    fn heading(&mut self, _level: u8, content: String, _state: &WalkState) -> String {
        content
    }

    fn paragraph(&mut self, content: String, _state: &WalkState) -> String {
        content
    }

    fn bold(&mut self, content: String, _state: &WalkState) -> String {
        content
    }

    fn italic(&mut self, content: String, _state: &WalkState) -> String {
        content
    }

    /// Called with the joined output of all items; `state.list_depth` is
    /// the depth of this list itself.
    fn list(&mut self, _ordered: bool, content: String, _state: &WalkState) -> String {
        content
    }

    /// `content` is the item's own output, `nested` the output of any
    /// sublists it contains. Block formats need the split to place the
    /// sublist after the item's paragraph.
    fn list_item(&mut self, content: String, nested: String, _state: &WalkState) -> String {
        let mut out = content;
        out.push_str(&nested);
        out
    }

    fn inline_code(&mut self, code: &str, _state: &WalkState) -> String {
        code.to_string()
    }

    fn code_block(&mut self, code: &str, _state: &WalkState) -> String {
        code.to_string()
    }

    fn blockquote(&mut self, content: String, _state: &WalkState) -> String {
        content
    }

    fn line_break(&mut self, _state: &WalkState) -> String {
        "\n".to_string()
    }

    fn other(&mut self, content: String, _state: &WalkState) -> String {
        content
    }
}

/// Project a tree through a visitor, starting from a fresh [`WalkState`].
pub fn walk<V: NodeVisitor>(root: &DocumentNode, visitor: &mut V) -> String {
    walk_node(root, visitor, &WalkState::default())
}

fn walk_node<V: NodeVisitor>(node: &DocumentNode, visitor: &mut V, state: &WalkState) -> String {
    match node.kind {
        NodeKind::Text => visitor.text(&node.text, state),
        NodeKind::InlineCode => visitor.inline_code(&node.text, state),
        NodeKind::CodeBlock => visitor.code_block(&node.text, state),
        NodeKind::LineBreak => visitor.line_break(state),
        NodeKind::Heading(level) => {
            let content = join_children(node, visitor, state);
            visitor.heading(level, content, state)
        }
        NodeKind::Paragraph => {
            let content = join_children(node, visitor, state);
            visitor.paragraph(content, state)
        }
        NodeKind::Bold => {
            let content = join_children(node, visitor, state);
            visitor.bold(content, state)
        }
        NodeKind::Italic => {
            let content = join_children(node, visitor, state);
            visitor.italic(content, state)
        }
        NodeKind::Blockquote => {
            let content = join_children(node, visitor, state);
            visitor.blockquote(content, state)
        }
        NodeKind::Other => {
            let content = join_children(node, visitor, state);
            visitor.other(content, state)
        }
        NodeKind::UnorderedList | NodeKind::OrderedList => {
            let ordered = node.kind == NodeKind::OrderedList;
            let inner = WalkState {
                list_depth: state.list_depth + 1,
                item_index: 0,
                item_ordered: ordered,
            };
            let mut index = 0;
            let mut content = String::new();
            for child in &node.children {
                if child.kind == NodeKind::ListItem {
                    index += 1;
                    let item_state = WalkState {
                        item_index: index,
                        ..inner
                    };
                    content.push_str(&walk_node(child, visitor, &item_state));
                } else {
                    content.push_str(&walk_node(child, visitor, &inner));
                }
            }
            visitor.list(ordered, content, &inner)
        }
        NodeKind::ListItem => {
            let mut content = String::new();
            let mut nested = String::new();
            for child in &node.children {
                if child.kind.is_list() {
                    nested.push_str(&walk_node(child, visitor, state));
                } else {
                    content.push_str(&walk_node(child, visitor, state));
                }
            }
            visitor.list_item(content, nested, state)
        }
    }
}

fn join_children<V: NodeVisitor>(
    node: &DocumentNode,
    visitor: &mut V,
    state: &WalkState,
) -> String {
    let mut out = String::new();
    for child in &node.children {
        out.push_str(&walk_node(child, visitor, state));
    }
    out
}
