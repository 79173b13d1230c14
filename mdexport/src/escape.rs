//! Per-format character escaping.
//!
//! One function per output family, shared by everything that emits that
//! family. The ODT projector in particular must route every dynamic value
//! (content, styles, manifest) through [`escape_xml`] so the package can
//! never contain malformed XML.

/// Escape the five XML-significant characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape literal text for an RTF control-word stream.
///
/// Backslash and both braces are prefixed with a backslash; embedded
/// newlines become explicit paragraph breaks.
pub fn escape_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\par\n"),
            _ => out.push(ch),
        }
    }
    out
}
