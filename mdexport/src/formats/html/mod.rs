//! HTML format implementation
//!
//! The thinnest back end: the parser already produces an HTML fragment, so
//! this format only wraps it into a complete, self-contained document with
//! embedded CSS. No external assets; the file renders identically offline.

use crate::error::FormatError;
use crate::escape::escape_xml;
use crate::format::Format;
use crate::parser::ParsedDocument;
use crate::tree::nodes::{DocumentNode, NodeKind};

const DOCUMENT_CSS: &str = "\
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 40px auto;
    padding: 20px;
    color: #1a1a1a;
}
pre {
    background: #f6f8fa;
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
}
code {
    font-family: 'Monaco', 'Menlo', monospace;
    background: #f6f8fa;
    padding: 2px 4px;
    border-radius: 3px;
}
blockquote {
    margin: 0;
    padding-left: 1em;
    border-left: 4px solid #ddd;
    color: #666;
}
img {
    max-width: 100%;
    height: auto;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 1em 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
th {
    background-color: #f6f8fa;
}
";

/// Format implementation for self-contained HTML documents
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Self-contained HTML with embedded CSS"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }

    fn serialize(&self, doc: &ParsedDocument) -> Result<String, FormatError> {
        Ok(wrap_in_document(&doc.html, &document_title(&doc.tree)))
    }
}

/// Title for the `<title>` element: the first heading's text, or a
/// generic fallback.
fn document_title(tree: &DocumentNode) -> String {
    fn first_heading(node: &DocumentNode) -> Option<String> {
        if matches!(node.kind, NodeKind::Heading(_)) {
            return Some(text_of(node));
        }
        node.children.iter().find_map(first_heading)
    }

    fn text_of(node: &DocumentNode) -> String {
        let mut out = node.text.clone();
        for child in &node.children {
            out.push_str(&text_of(child));
        }
        out
    }

    let title = first_heading(tree).unwrap_or_default();
    let title = title.trim();
    if title.is_empty() {
        "Document".to_string()
    } else {
        title.to_string()
    }
}

/// Wrap an HTML fragment in a complete styled document.
pub fn wrap_in_document(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <style>\n{DOCUMENT_CSS}</style>\n\
         </head>\n\
         <body>\n{fragment}\n</body>\n\
         </html>\n",
        escape_xml(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn wraps_fragment_into_complete_document() {
        let doc = parse("# My Doc\n\nHello.\n").unwrap();
        let html = HtmlFormat.serialize(&doc).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Doc</title>"));
        assert!(html.contains("<h1>My Doc</h1>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn falls_back_to_generic_title() {
        let doc = parse("Just a paragraph.\n").unwrap();
        let html = HtmlFormat.serialize(&doc).unwrap();
        assert!(html.contains("<title>Document</title>"));
    }

    #[test]
    fn title_is_escaped() {
        let doc = parse("# a < b\n").unwrap();
        let html = HtmlFormat.serialize(&doc).unwrap();
        assert!(html.contains("<title>a &lt; b</title>"));
    }
}
