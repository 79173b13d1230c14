//! The intermediate document tree and its traversal.

pub mod from_html;
pub mod nodes;
pub mod walk;
