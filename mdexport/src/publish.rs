//! Document export pipeline.
//!
//! Provides a high-level API for converting markdown source to output
//! formats. This module bridges the gap between the converter and file
//! I/O, handling both in-memory and file-based output.
//!
//! Use this for commands like "export to RTF" where you want a single
//! call that handles conversion, filename derivation, and optional file
//! writing. For more control, use [`Converter`] directly.

use crate::convert::{ConversionOutcome, ConversionResult, Converter};
use crate::error::FormatError;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to export a document.
///
/// Use the builder pattern to configure the export:
///
/// ```ignore
/// let spec = PublishSpec::new("# Notes\n\nBody.", "rtf")
///     .with_output_dir("exports");
/// ```
///
/// If no output directory is provided, the converted bytes are returned
/// in memory. With one, the file is written under the derived filename.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// Markdown source to convert.
    pub source: &'a str,
    /// Target format name (e.g., "html", "rtf", "odt").
    pub format: &'a str,
    /// Optional directory for writing output.
    pub output_dir: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(source: &'a str, format: &'a str) -> Self {
        Self {
            source,
            format,
            output_dir: None,
        }
    }

    /// Sets the output directory. If provided, content is written to disk
    /// under the filename derived from the document's first line.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// The output from a successful export.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Conversion result held in memory (no output directory given).
    InMemory(ConversionResult),
    /// Path to the written file.
    File(PathBuf),
}

/// Outcome of an export request.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Published(PublishArtifact),
    /// The converter was busy; nothing was produced.
    Dropped,
}

/// Exports a document according to the publish spec.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The source is empty
/// - The format is not registered
/// - Serialization fails
/// - File I/O fails
pub fn publish(
    converter: &Converter,
    spec: PublishSpec<'_>,
) -> Result<PublishOutcome, FormatError> {
    let result = match converter.convert(spec.source, spec.format)? {
        ConversionOutcome::Completed(result) => result,
        ConversionOutcome::Dropped => return Ok(PublishOutcome::Dropped),
    };

    let artifact = match spec.output_dir {
        Some(dir) => PublishArtifact::File(write_to_dir(&dir, result)?),
        None => PublishArtifact::InMemory(result),
    };
    Ok(PublishOutcome::Published(artifact))
}

fn write_to_dir(dir: &Path, result: ConversionResult) -> Result<PathBuf, FormatError> {
    let path = dir.join(&result.filename);
    fs::write(&path, &result.bytes)
        .map(|_| path.clone())
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}
