//! Conversion orchestrator.
//!
//! [`Converter`] ties the pipeline together: gate re-entrancy, reject
//! empty input, parse the source once, dispatch to the registered format,
//! and derive the output filename. Conversions are single-flight: a
//! request arriving while one is in flight is dropped, because the shared
//! output surface (buttons, save target) cannot host two conversions at
//! once. The busy flag is released on every exit path, including errors,
//! via a drop guard.

use crate::error::FormatError;
use crate::parser;
use crate::registry::FormatRegistry;
use std::sync::atomic::{AtomicBool, Ordering};

/// Successful conversion output: the bytes plus the metadata the save
/// collaborator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

/// Outcome of a conversion request.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Completed(ConversionResult),
    /// Another conversion was in flight; this request was not started.
    Dropped,
}

/// Orchestrates conversions against a format registry.
pub struct Converter {
    registry: FormatRegistry,
    busy: AtomicBool,
}

impl Converter {
    pub fn new() -> Self {
        Self::with_registry(FormatRegistry::with_defaults())
    }

    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self {
            registry,
            busy: AtomicBool::new(false),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Whether a conversion is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Convert markdown source to the named format.
    ///
    /// The tree is rebuilt from scratch for this request; nothing carries
    /// over from earlier conversions.
    pub fn convert(&self, source: &str, format: &str) -> Result<ConversionOutcome, FormatError> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return Ok(ConversionOutcome::Dropped);
        };

        if source.trim().is_empty() {
            return Err(FormatError::EmptyInput);
        }

        let fmt = self.registry.get(format)?;
        let doc = parser::parse(source)?;
        let bytes = fmt.serialize_bytes(&doc)?.into_bytes();
        let filename = derive_filename(source, fmt.extension());

        Ok(ConversionOutcome::Completed(ConversionResult {
            bytes,
            filename,
            mime_type: fmt.mime_type().to_string(),
        }))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the busy flag for the duration of one conversion. Dropping the
/// guard releases the flag, which covers early returns and errors alike.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// `<sanitized first line>.<extension>`, falling back to `document`.
pub fn derive_filename(source: &str, extension: &str) -> String {
    format!("{}.{extension}", sanitize_filename(source))
}

/// Derive a filename base from the document's first line: strip heading
/// markers, truncate to 30 characters, drop anything outside
/// letters/digits/hyphen/underscore/whitespace, collapse whitespace runs
/// to single hyphens and lowercase the result.
pub fn sanitize_filename(source: &str) -> String {
    let first_line = source.lines().next().unwrap_or("");
    let stripped = first_line.trim_start_matches('#').trim_start();
    let truncated: String = stripped.chars().take(30).collect();
    let filtered: String = truncated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || c.is_whitespace())
        .collect();

    let mut base = String::with_capacity(filtered.len());
    let mut in_whitespace = false;
    for ch in filtered.trim().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                base.push('-');
            }
            in_whitespace = true;
        } else {
            base.push(ch.to_ascii_lowercase());
            in_whitespace = false;
        }
    }

    if base.is_empty() {
        "document".to_string()
    } else {
        base
    }
}
