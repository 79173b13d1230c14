use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "# Trip Plan\n\nPack **light**.\n\n- boots\n- map\n";

#[test]
fn converts_to_plain_text_on_stdout() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg(input_path.as_os_str()).arg("--to").arg("txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Trip Plan\n========="))
        .stdout(predicate::str::contains("• boots"));
}

#[test]
fn explicit_convert_subcommand_matches_default() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Trip Plan"));
}

#[test]
fn writes_file_named_after_first_line() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("rtf")
        .arg("--output-dir")
        .arg(out_dir.as_os_str());

    cmd.assert().success();
    let written = fs::read_to_string(out_dir.join("trip-plan.rtf")).unwrap();
    assert!(written.starts_with("{\\rtf1"));
}

#[test]
fn binary_format_without_output_dir_is_refused() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg(input_path.as_os_str()).arg("--to").arg("odt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("output directory"));
}

#[test]
fn unknown_format_is_an_error() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg(input_path.as_os_str()).arg("--to").arg("docx");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("docx"));
}

#[test]
fn lists_registered_formats() {
    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("txt"))
        .stdout(predicate::str::contains("rtf"))
        .stdout(predicate::str::contains("odt"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn preview_prints_rendered_html() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg("preview").arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<h1>Trip Plan</h1>"))
        .stdout(predicate::str::contains("<strong>light</strong>"));
}

#[test]
fn tree_prints_the_document_structure_as_json() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg("tree").arg(input_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("output is JSON");
    assert_eq!(json["kind"], "Other");
    assert_eq!(json["children"][0]["kind"]["Heading"], 1);
}

#[test]
fn default_format_comes_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, SAMPLE).unwrap();

    let config_path = dir.path().join("mdexport.toml");
    fs::write(
        &config_path,
        r#"[convert]
default_format = "html"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdexport");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"));
}
