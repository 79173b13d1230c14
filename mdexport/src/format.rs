//! Format trait definition
//!
//! This module defines the core Format trait that all output formats
//! implement. Each format is one projector over the parsed document plus
//! the metadata (extension, MIME type) the orchestrator needs, so the
//! registry is the single table mapping a format to all three.

use crate::error::FormatError;
use crate::parser::ParsedDocument;

/// Serialized output produced by a [`Format`] implementation.
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., plain text, RTF, HTML)
    Text(String),
    /// Binary output (e.g., ODT package, PDF)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Trait for output formats.
///
/// Text formats implement [`Format::serialize`]; packaged/binary formats
/// override [`Format::serialize_bytes`] instead and leave `serialize`
/// returning `NotSupported`.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "txt", "rtf", "odt")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Canonical file extension, without the leading dot.
    fn extension(&self) -> &str;

    /// Declared MIME type of the output.
    fn mime_type(&self) -> &str;

    /// Serialize a parsed document into text output.
    fn serialize(&self, _doc: &ParsedDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not produce text output",
            self.name()
        )))
    }

    /// Serialize a parsed document into bytes.
    ///
    /// The default delegates to [`Format::serialize`]; binary formats
    /// override this to return [`SerializedDocument::Binary`].
    fn serialize_bytes(&self, doc: &ParsedDocument) -> Result<SerializedDocument, FormatError> {
        self.serialize(doc).map(SerializedDocument::Text)
    }
}
