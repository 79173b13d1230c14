//! ODT format implementation
//!
//! OpenDocument Text is a packaged format: a zip archive whose first entry
//! is the uncompressed `mimetype` declaration, followed by the manifest,
//! the named styles and the document content. All four entries are
//! mandatory and written in that order.
//!
//! Every dynamic value — content text, style names, manifest paths — goes
//! through the shared XML escaping function, so the package can never
//! contain malformed XML.

use crate::error::FormatError;
use crate::escape::escape_xml;
use crate::format::{Format, SerializedDocument};
use crate::parser::ParsedDocument;
use crate::tree::nodes::DocumentNode;
use crate::tree::walk::{walk, NodeVisitor, WalkState};
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub const MIME_TYPE: &str = "application/vnd.oasis.opendocument.text";

/// Deepest nesting level with its own list style. Deeper lists reuse the
/// deepest defined style instead of referencing an undefined name.
const MAX_LIST_DEPTH: usize = 3;

/// Format implementation for ODT packages
pub struct OdtFormat;

impl Format for OdtFormat {
    fn name(&self) -> &str {
        "odt"
    }

    fn description(&self) -> &str {
        "OpenDocument Text package"
    }

    fn extension(&self) -> &str {
        "odt"
    }

    fn mime_type(&self) -> &str {
        MIME_TYPE
    }

    fn serialize(&self, _doc: &ParsedDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(
            "ODT serialization produces binary output".to_string(),
        ))
    }

    fn serialize_bytes(&self, doc: &ParsedDocument) -> Result<SerializedDocument, FormatError> {
        to_odt(&doc.tree).map(SerializedDocument::Binary)
    }
}

/// Project a tree to a packaged ODT document.
pub fn to_odt(tree: &DocumentNode) -> Result<Vec<u8>, FormatError> {
    let content = content_xml(tree);
    let styles = styles_xml();
    let manifest = manifest_xml();
    package(&manifest, &styles, &content)
}

fn package(manifest: &str, styles: &str, content: &str) -> Result<Vec<u8>, FormatError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    // The mimetype entry must come first and must not be compressed, so
    // consumers can sniff the package type from the raw bytes.
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("mimetype", stored).map_err(package_err)?;
    writer
        .write_all(MIME_TYPE.as_bytes())
        .map_err(|e| FormatError::PackagingError(e.to_string()))?;

    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, body) in [
        ("META-INF/manifest.xml", manifest),
        ("styles.xml", styles),
        ("content.xml", content),
    ] {
        writer.start_file(name, deflated).map_err(package_err)?;
        writer
            .write_all(body.as_bytes())
            .map_err(|e| FormatError::PackagingError(e.to_string()))?;
    }

    let cursor = writer.finish().map_err(package_err)?;
    Ok(cursor.into_inner())
}

fn package_err(err: zip::result::ZipError) -> FormatError {
    FormatError::PackagingError(err.to_string())
}

/// Build content.xml: the traversal output inside the office body.
pub fn content_xml(tree: &DocumentNode) -> String {
    let body = walk(tree, &mut OdtProjector);
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <office:document-content \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\" \
         xmlns:style=\"urn:oasis:names:tc:opendocument:xmlns:style:1.0\" \
         office:version=\"1.2\">\
         <office:body><office:text>{body}</office:text></office:body>\
         </office:document-content>"
    )
}

struct OdtProjector;

impl NodeVisitor for OdtProjector {
    fn text(&mut self, text: &str, _state: &WalkState) -> String {
        if text.is_empty() {
            String::new()
        } else {
            format!("<text:span>{}</text:span>", escape_xml(text))
        }
    }

    fn heading(&mut self, level: u8, content: String, _state: &WalkState) -> String {
        format!(
            "<text:h text:style-name=\"Heading_{level}\" text:outline-level=\"{level}\">{content}</text:h>"
        )
    }

    fn paragraph(&mut self, content: String, _state: &WalkState) -> String {
        format!("<text:p text:style-name=\"Standard\">{content}</text:p>")
    }

    fn bold(&mut self, content: String, _state: &WalkState) -> String {
        format!("<text:span text:style-name=\"Bold\">{content}</text:span>")
    }

    fn italic(&mut self, content: String, _state: &WalkState) -> String {
        format!("<text:span text:style-name=\"Italic\">{content}</text:span>")
    }

    fn list(&mut self, ordered: bool, content: String, state: &WalkState) -> String {
        let style = list_style_name(ordered, state.list_depth);
        format!(
            "<text:list text:style-name=\"{}\">{content}</text:list>",
            escape_xml(&style)
        )
    }

    fn list_item(&mut self, content: String, nested: String, _state: &WalkState) -> String {
        format!(
            "<text:list-item><text:p text:style-name=\"Standard\">{content}</text:p>{nested}</text:list-item>"
        )
    }

    fn inline_code(&mut self, code: &str, _state: &WalkState) -> String {
        format!(
            "<text:span text:style-name=\"Source_Text\">{}</text:span>",
            escape_xml(code)
        )
    }

    fn code_block(&mut self, code: &str, _state: &WalkState) -> String {
        let escaped = escape_xml(code.trim_end_matches('\n'));
        format!(
            "<text:p text:style-name=\"Preformatted_Text\">{}</text:p>",
            escaped.replace('\n', "<text:line-break/>")
        )
    }

    fn line_break(&mut self, _state: &WalkState) -> String {
        "<text:line-break/>".to_string()
    }
}

/// Per-depth list style name, capped at the deepest defined style.
fn list_style_name(ordered: bool, depth: usize) -> String {
    let depth = depth.clamp(1, MAX_LIST_DEPTH);
    if ordered {
        format!("List_Number_{depth}")
    } else {
        format!("List_Bullet_{depth}")
    }
}

/// Build styles.xml: paragraph, text and per-depth list styles.
pub fn styles_xml() -> String {
    let mut styles = String::from(
        "<style:style style:name=\"Standard\" style:family=\"paragraph\" style:class=\"text\"/>\
         <style:style style:name=\"Heading\" style:family=\"paragraph\" style:parent-style-name=\"Standard\">\
         <style:text-properties fo:font-weight=\"bold\"/></style:style>",
    );

    for (level, size) in [(1, 18), (2, 16), (3, 14)] {
        styles.push_str(&format!(
            "<style:style style:name=\"Heading_{level}\" style:family=\"paragraph\" \
             style:parent-style-name=\"Heading\">\
             <style:text-properties fo:font-size=\"{size}pt\"/></style:style>"
        ));
    }

    styles.push_str(
        "<style:style style:name=\"Preformatted_Text\" style:family=\"paragraph\" \
         style:parent-style-name=\"Standard\">\
         <style:text-properties style:font-name=\"Courier New\"/></style:style>\
         <style:style style:name=\"Bold\" style:family=\"text\">\
         <style:text-properties fo:font-weight=\"bold\"/></style:style>\
         <style:style style:name=\"Italic\" style:family=\"text\">\
         <style:text-properties fo:font-style=\"italic\"/></style:style>\
         <style:style style:name=\"Source_Text\" style:family=\"text\">\
         <style:text-properties style:font-name=\"Courier New\"/></style:style>",
    );

    for depth in 1..=MAX_LIST_DEPTH {
        styles.push_str(&list_style_xml(false, depth));
        styles.push_str(&list_style_xml(true, depth));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <office:document-styles \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:style=\"urn:oasis:names:tc:opendocument:xmlns:style:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\" \
         xmlns:fo=\"urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0\">\
         <office:styles>{styles}</office:styles>\
         </office:document-styles>"
    )
}

/// One named list style defining all levels up to the cap, so a style
/// referenced at any structural depth resolves.
fn list_style_xml(ordered: bool, depth: usize) -> String {
    let name = list_style_name(ordered, depth);
    let mut levels = String::new();
    for level in 1..=MAX_LIST_DEPTH {
        let properties = format!(
            "<style:list-level-properties text:space-before=\"{}in\" \
             text:min-label-width=\"0.25in\"/>",
            0.25 * level as f32
        );
        if ordered {
            levels.push_str(&format!(
                "<text:list-level-style-number text:level=\"{level}\" \
                 style:num-format=\"1\" style:num-suffix=\".\">{properties}\
                 </text:list-level-style-number>"
            ));
        } else {
            levels.push_str(&format!(
                "<text:list-level-style-bullet text:level=\"{level}\" \
                 text:bullet-char=\"\u{2022}\">{properties}\
                 </text:list-level-style-bullet>"
            ));
        }
    }
    format!(
        "<text:list-style style:name=\"{}\">{levels}</text:list-style>",
        escape_xml(&name)
    )
}

/// Build the package manifest, listing exactly the entries written.
pub fn manifest_xml() -> String {
    let mut entries = manifest_entry("/", MIME_TYPE, true);
    entries.push_str(&manifest_entry("content.xml", "text/xml", false));
    entries.push_str(&manifest_entry("styles.xml", "text/xml", false));
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <manifest:manifest \
         xmlns:manifest=\"urn:oasis:names:tc:opendocument:xmlns:manifest:1.0\" \
         manifest:version=\"1.2\">{entries}</manifest:manifest>"
    )
}

fn manifest_entry(path: &str, media_type: &str, versioned: bool) -> String {
    let version = if versioned {
        " manifest:version=\"1.2\""
    } else {
        ""
    };
    format!(
        "<manifest:file-entry manifest:full-path=\"{}\"{version} manifest:media-type=\"{}\"/>",
        escape_xml(path),
        escape_xml(media_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::nodes::NodeKind;

    #[test]
    fn style_name_caps_at_deepest_defined_depth() {
        assert_eq!(list_style_name(false, 1), "List_Bullet_1");
        assert_eq!(list_style_name(true, 3), "List_Number_3");
        assert_eq!(list_style_name(false, 7), "List_Bullet_3");
    }

    #[test]
    fn content_escapes_text() {
        let tree = DocumentNode::root(vec![DocumentNode::new(
            NodeKind::Paragraph,
            vec![DocumentNode::text("a < b & \"c\"")],
        )]);
        let xml = content_xml(&tree);
        assert!(xml.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!xml.contains("a < b"));
    }

    #[test]
    fn every_referenced_fixed_style_is_defined() {
        let styles = styles_xml();
        for name in [
            "Standard",
            "Heading_1",
            "Heading_2",
            "Heading_3",
            "Bold",
            "Italic",
            "Source_Text",
            "Preformatted_Text",
            "List_Bullet_1",
            "List_Bullet_3",
            "List_Number_1",
            "List_Number_3",
        ] {
            assert!(
                styles.contains(&format!("style:name=\"{name}\"")),
                "styles.xml should define {name}"
            );
        }
    }

    #[test]
    fn manifest_lists_written_entries_only() {
        let manifest = manifest_xml();
        assert!(manifest.contains("manifest:full-path=\"content.xml\""));
        assert!(manifest.contains("manifest:full-path=\"styles.xml\""));
        assert!(!manifest.contains("meta.xml"));
    }

    #[test]
    fn code_block_newlines_become_line_breaks() {
        let tree = DocumentNode::root(vec![DocumentNode::leaf(
            NodeKind::CodeBlock,
            "line one\nline two\n",
        )]);
        let xml = content_xml(&tree);
        assert!(xml.contains("line one<text:line-break/>line two"));
    }
}
