//! Markdown to multi-format document conversion
//!
//!     This crate converts a single markdown source into several document
//!     formats (plain text, RTF, ODT, HTML and optionally PDF) plus a live
//!     HTML preview, all from one shared parse.
//!
//!     TLDR: For format authors:
//!         - The pipeline is markdown -> HTML (comrak) -> DOM (html5ever) -> document tree -> format.
//!         - A format never re-parses markdown. It implements a visitor over the
//!           tree (./tree/walk.rs) and projects each node kind to its own syntax.
//!         - Escaping is centralized in ./escape.rs; formats call into it rather
//!           than rolling their own.
//!         - Each format gets unit tests in its module and an integration test
//!           under tests/ that inspects real output bytes.
//!
//! Architecture
//!
//!     The goal is to keep everything format agnostic up to the last step. The
//!     markdown source is rendered to HTML once, the HTML is parsed into a small
//!     document tree (./tree/nodes.rs) that keeps only the structure the formats
//!     care about, and a single recursive traversal (./tree/walk.rs) drives every
//!     format through the NodeVisitor trait. Format modules are then pure
//!     projections: node kind in, format-specific text out. List depth and item
//!     numbering are computed by the traversal so no format counts anything
//!     itself.
//!
//!     This is a pure lib. It powers mdexport-cli but is shell agnostic: no
//!     std print, no env vars, no assumption about where output lands. The one
//!     exception is the optional PDF format, which shells out to a headless
//!     browser and sits behind the native-export feature.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── escape.rs               # Shared XML and RTF escaping
//!     ├── parser.rs               # markdown -> HTML -> ParsedDocument
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── convert.rs              # Orchestrator: single-flight, filenames
//!     ├── publish.rs              # High-level export with optional file output
//!     ├── preview.rs              # Preview memoization and debouncing
//!     ├── tree
//!     │   ├── nodes.rs            # DocumentNode / NodeKind
//!     │   ├── from_html.rs        # DOM -> tree conversion
//!     │   └── walk.rs             # Generic traversal + NodeVisitor
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs          # One projector per format
//!     └── lib.rs
//!
//! Formats
//!
//!     Format capabilities are implemented with the Format trait. Text formats
//!     implement serialize(), binary ones (ODT, PDF) implement serialize_bytes().
//!     The FormatRegistry maps format names to implementations; the Converter
//!     resolves a name, runs the pipeline once and attaches the derived filename
//!     and MIME type.
//!
//!     Formats differ in how faithful they can be. Plain text flattens styling
//!     into typography (underlined headings, bullet glyphs). RTF and ODT keep
//!     styling but cap list nesting where their style tables end. HTML is near
//!     lossless since the pipeline already speaks it. The conversion is one way
//!     by design, nothing here parses RTF or ODT back.
//!
//! Library Choices
//!
//!     We offload the hard parsing to specialized crates: comrak for markdown
//!     (it tracks GFM closely), html5ever for the DOM step so we inherit a real
//!     HTML parser instead of regexing tags, and zip for ODT packaging. The
//!     formats themselves are hand written because their output is small and
//!     fixed, a style table and a projection, not a general serializer.
//!
//!     PDF is the exception to the no-shelling-out rule: producing print
//!     quality PDF from HTML is exactly what browser engines do, so the pdf
//!     format drives a headless Chrome against the HTML output rather than
//!     pulling in a layout engine.

pub mod convert;
pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod parser;
pub mod preview;
pub mod publish;
pub mod registry;
pub mod tree;

pub use convert::{ConversionOutcome, ConversionResult, Converter};
pub use error::FormatError;
pub use format::{Format, SerializedDocument};
pub use parser::{parse, ParsedDocument};
pub use preview::{Debouncer, PreviewController, PreviewMode};
pub use publish::{publish, PublishArtifact, PublishOutcome, PublishSpec};
pub use registry::FormatRegistry;
pub use tree::nodes::{DocumentNode, NodeKind};
pub use tree::walk::{walk, NodeVisitor, WalkState};
