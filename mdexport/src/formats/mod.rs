//! Format implementations.
//!
//! Each submodule is one output format: a [`crate::format::Format`]
//! implementation plus its projector over the document tree.

pub mod html;
pub mod odt;
#[cfg(feature = "native-export")]
pub mod pdf;
pub mod rtf;
pub mod text;
