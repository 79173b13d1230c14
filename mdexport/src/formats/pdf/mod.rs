//! PDF export built on top of the HTML format + headless Chrome.
//!
//! The implementation renders the document to HTML, injects A4 print CSS,
//! then shells out to a Chrome/Chromium binary running in headless mode to
//! print the page to PDF. Rendering is delegated entirely to the external
//! binary; failures surface as packaging errors.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::formats::html::HtmlFormat;
use crate::parser::ParsedDocument;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
use url::Url;
use which::which;

const PRINT_CSS: &str = "@page { size: A4; margin: 18mm; }\nbody { margin: 0; }\n";

/// Format implementation that shells out to Chrome/Chromium for PDFs.
pub struct PdfFormat;

impl Format for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "HTML-based PDF export via headless Chrome"
    }

    fn extension(&self) -> &str {
        "pdf"
    }

    fn mime_type(&self) -> &str {
        "application/pdf"
    }

    fn serialize(&self, _doc: &ParsedDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(
            "PDF serialization produces binary output".to_string(),
        ))
    }

    fn serialize_bytes(&self, doc: &ParsedDocument) -> Result<SerializedDocument, FormatError> {
        let html = HtmlFormat.serialize(doc)?;
        let final_html = inject_print_css(&html);
        let bytes = render_html_to_pdf(&final_html)?;
        Ok(SerializedDocument::Binary(bytes))
    }
}

fn inject_print_css(html: &str) -> String {
    let style_tag = format!("<style data-mdexport-pdf>\n{PRINT_CSS}</style>");
    if let Some(idx) = html.find("</head>") {
        let mut output = String::with_capacity(html.len() + style_tag.len());
        output.push_str(&html[..idx]);
        output.push_str(&style_tag);
        output.push_str(&html[idx..]);
        output
    } else {
        format!("{style_tag}{html}")
    }
}

fn render_html_to_pdf(html: &str) -> Result<Vec<u8>, FormatError> {
    let chrome = resolve_chrome_binary()?;
    let temp_dir = tempdir().map_err(|e| FormatError::PackagingError(e.to_string()))?;
    let html_path = temp_dir.path().join("mdexport.html");
    let mut html_file =
        fs::File::create(&html_path).map_err(|e| FormatError::PackagingError(e.to_string()))?;
    html_file
        .write_all(html.as_bytes())
        .map_err(|e| FormatError::PackagingError(e.to_string()))?;

    let pdf_path = temp_dir.path().join("mdexport.pdf");
    let file_url = Url::from_file_path(&html_path).map_err(|_| {
        FormatError::PackagingError("failed to construct file:// URL for HTML input".to_string())
    })?;

    let pdf_arg = format!("--print-to-pdf={}", pdf_path.display());

    let status = Command::new(&chrome)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--print-to-pdf-no-header")
        .arg(pdf_arg)
        .arg(file_url.as_str())
        .status()
        .map_err(|e| {
            FormatError::PackagingError(format!(
                "failed to launch Chrome ({}): {}",
                chrome.display(),
                e
            ))
        })?;

    if !status.success() {
        return Err(FormatError::PackagingError(format!(
            "Chrome exited with status {status}"
        )));
    }

    fs::read(&pdf_path).map_err(|e| FormatError::PackagingError(e.to_string()))
}

fn resolve_chrome_binary() -> Result<PathBuf, FormatError> {
    for var in ["MDEXPORT_CHROME_BIN", "GOOGLE_CHROME_BIN", "CHROME_BIN"] {
        if let Some(path) = env::var_os(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }

    for candidate in [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "msedge",
    ] {
        if let Ok(path) = which(candidate) {
            return Ok(path);
        }
    }

    #[cfg(target_os = "macos")]
    {
        let candidate =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    #[cfg(target_os = "linux")]
    {
        let candidates = [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium-browser",
            "/usr/bin/chromium",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    Err(FormatError::PackagingError(
        "unable to locate a Chrome/Chromium binary; set MDEXPORT_CHROME_BIN to override detection"
            .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_css_lands_inside_head() {
        let html = "<html><head><title>t</title></head><body></body></html>";
        let injected = inject_print_css(html);
        let head_end = injected.find("</head>").unwrap();
        let style = injected.find("data-mdexport-pdf").unwrap();
        assert!(style < head_end);
    }

    #[test]
    fn print_css_prepended_without_head() {
        let injected = inject_print_css("<p>bare</p>");
        assert!(injected.starts_with("<style data-mdexport-pdf>"));
    }
}
