//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name. The registry is the
//! one place where a format tag resolves to its projector, extension and
//! MIME type; nothing else branches on format names.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::parser::ParsedDocument;
use std::collections::HashMap;

/// Registry of output formats.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a parsed document using the specified format
    pub fn serialize(
        &self,
        doc: &ParsedDocument,
        format: &str,
    ) -> Result<SerializedDocument, FormatError> {
        self.get(format)?.serialize_bytes(doc)
    }

    /// Create a registry with the default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::rtf::RtfFormat);
        registry.register(crate::formats::odt::OdtFormat);
        #[cfg(feature = "native-export")]
        registry.register(crate::formats::pdf::PdfFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn extension(&self) -> &str {
            "tst"
        }
        fn mime_type(&self) -> &str {
            "text/x-test"
        }
        fn serialize(&self, _doc: &ParsedDocument) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().extension(), "tst");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("expected FormatNotFound, got {:?}", other.map(|f| f.name())),
        }
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let doc = parse("Hello").unwrap();
        let bytes = registry.serialize(&doc, "test").unwrap().into_bytes();
        assert_eq!(bytes, b"test output");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::with_defaults();
        for name in ["html", "txt", "rtf", "odt"] {
            assert!(registry.has(name), "missing default format {name}");
        }
    }

    #[test]
    fn test_default_formats_declare_distinct_mime_types() {
        let registry = FormatRegistry::with_defaults();
        let mimes: std::collections::HashSet<_> = registry
            .list_formats()
            .iter()
            .map(|name| registry.get(name).unwrap().mime_type().to_string())
            .collect();
        assert_eq!(mimes.len(), registry.list_formats().len());
    }
}
