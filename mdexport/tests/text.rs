//! End-to-end tests for the plain-text format (markdown → text).

use mdexport::formats::text::to_plain_text;
use mdexport::parse;

fn md_to_text(source: &str) -> String {
    let doc = parse(source).expect("markdown parses");
    to_plain_text(&doc.tree)
}

#[test]
fn heading_underlines_follow_level() {
    let text = md_to_text("# Alpha\n\n## Beta\n\n### Gamma\n\nBody.\n");
    assert!(text.contains("Alpha\n====="));
    assert!(text.contains("Beta\n----"));
    // Level three gets no underline.
    assert!(text.contains("Gamma\n\nBody."));
    assert!(!text.contains("Gamma\n-"));
}

#[test]
fn underline_width_counts_characters_not_bytes() {
    let text = md_to_text("# Café Menu\n");
    assert_eq!(text, "Café Menu\n=========");
}

#[test]
fn styling_flattens_to_content() {
    let text = md_to_text("Some **bold** and *italic* words.\n");
    assert_eq!(text, "Some bold and italic words.");
}

#[test]
fn unordered_lists_use_bullets() {
    let text = md_to_text("- boots\n- map\n- compass\n");
    assert_eq!(text, "\u{2022} boots\n\u{2022} map\n\u{2022} compass");
}

#[test]
fn ordered_markers_ignore_source_numbering() {
    // Positional numbering, not the source's values.
    let text = md_to_text("1. one\n1. two\n1. three\n");
    assert_eq!(text, "01. one\n02. two\n03. three");
}

#[test]
fn nested_lists_indent_beyond_the_first_level() {
    let text = md_to_text("- outer\n  - inner\n    - innermost\n- second\n");
    assert_eq!(
        text,
        "\u{2022} outer\n  \u{2022} inner\n    \u{2022} innermost\n\u{2022} second"
    );
}

#[test]
fn code_blocks_are_indented_and_unescaped() {
    // comrak escapes `<` in the HTML; the text projection restores it.
    let text = md_to_text("```\nlet x = a < b;\n```\n");
    assert_eq!(text, "    let x = a < b;");
}

#[test]
fn inline_code_keeps_backticks() {
    let text = md_to_text("Run `make all` now.\n");
    assert_eq!(text, "Run `make all` now.");
}

#[test]
fn blockquote_is_indented() {
    let text = md_to_text("intro\n\n> quoted line\n");
    assert!(text.contains("\n  quoted line"));
}

#[test]
fn blank_runs_never_exceed_one_blank_line() {
    let text = md_to_text("para one\n\n\n\n\npara two\n");
    assert_eq!(text, "para one\n\npara two");
}

#[test]
fn output_has_no_leading_or_trailing_whitespace() {
    let text = md_to_text("\n\n# Title\n\nbody\n\n\n");
    assert!(!text.starts_with(char::is_whitespace));
    assert!(!text.ends_with(char::is_whitespace));
}
