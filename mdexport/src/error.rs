//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Source input was empty or whitespace-only
    EmptyInput,
    /// Format not found in registry
    FormatNotFound(String),
    /// Error while parsing the source into the document tree
    ParseError(String),
    /// Error during projection to an output format
    SerializationError(String),
    /// The packaging/rendering step of a packaged format failed
    PackagingError(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::EmptyInput => write!(f, "Input is empty"),
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::PackagingError(msg) => write!(f, "Generation failed: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
