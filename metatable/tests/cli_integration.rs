//! Integration tests for metatable CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const NOTE_JSON: &str = r##"{
    "author": { "value": "Jane Doe" },
    "related": { "value": [{ "path": "NoteA" }, { "path": "NoteB" }] },
    "summary": { "label": "Summary", "value": "**draft** notes", "containsMarkdown": true, "shouldHideLabel": true },
    "tags": { "value": ["#alpha", "#beta"] }
}"##;

fn run_metatable(args: &[&str], stdin: Option<&str>) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_metatable"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    {
        let mut handle = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn write_note(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_metatable(&["--help"], None);

    assert!(success);
    assert!(stdout.contains("metatable"));
    assert!(stdout.contains("--query"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_metatable(&["--version"], None);

    assert!(success);
    assert!(stdout.contains("metatable"));
}

#[test]
fn test_table_output() {
    let dir = TempDir::new().unwrap();
    let file = write_note(&dir, "note.json", NOTE_JSON);
    let (stdout, _, success) = run_metatable(&[&file, "--no-color"], None);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("author"));
    assert!(lines[0].contains("Jane Doe"));
    assert!(lines[1].contains("NoteA, NoteB"));
    assert!(lines[2].starts_with("**draft** notes"));
    assert!(lines[3].contains("#alpha #beta"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_note(&dir, "note.json", NOTE_JSON);
    let (stdout, _, success) = run_metatable(&[&file, "--output", "json", "--query", "jane"], None);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let rows = parsed["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[0]["key"], "author");
    assert_eq!(rows[0]["label"]["is_match"], false);
    assert_eq!(rows[0]["value"]["content"]["is_match"], true);

    let related = &rows[1]["value"]["content"]["fragments"];
    assert_eq!(related[0]["source"], "[[NoteA]]");
    assert_eq!(related[1]["kind"], "separator");
    assert_eq!(related[2]["source"], "[[NoteB]]");

    assert!(rows[2].get("label").is_none());
    assert_eq!(rows[2]["value"]["col_span"], 2);

    assert_eq!(rows[3]["value"]["content"]["kind"], "tags");
}

#[test]
fn test_html_output() {
    let dir = TempDir::new().unwrap();
    let file = write_note(&dir, "note.json", NOTE_JSON);
    let (stdout, _, success) = run_metatable(
        &[&file, "-o", "html", "-q", "beta", "--class-prefix", "demo"],
        None,
    );

    assert!(success);
    assert!(stdout.starts_with("<table class=\"demo__meta-table\">"));
    assert!(stdout.contains("class=\"tag demo__item-tag is-search-match\""));
    assert!(stdout.contains("data-value=\"#alpha, #beta\""));
}

#[test]
fn test_yaml_input() {
    let dir = TempDir::new().unwrap();
    let file = write_note(
        &dir,
        "note.yaml",
        "status:\n  value: draft\n  label: Status\nrelated:\n  value:\n    - path: NoteA\n",
    );
    let (stdout, _, success) = run_metatable(&[&file, "--no-color"], None);

    assert!(success);
    assert!(stdout.contains("Status"));
    assert!(stdout.contains("draft"));
    assert!(stdout.contains("NoteA"));
}

#[test]
fn test_stdin_input() {
    let (stdout, _, success) = run_metatable(&["-", "-o", "json"], Some(NOTE_JSON));

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_settings_visible_renders_nothing() {
    let dir = TempDir::new().unwrap();
    let file = write_note(&dir, "note.json", NOTE_JSON);
    let (stdout, _, success) = run_metatable(&[&file, "--settings-visible"], None);

    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_invalid_metadata() {
    let dir = TempDir::new().unwrap();
    let file = write_note(&dir, "note.json", "[1, 2, 3]");
    let (_, stderr, success) = run_metatable(&[&file], None);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("invalid metadata"));
}

#[test]
fn test_missing_file() {
    let (_, stderr, success) = run_metatable(&["/nonexistent/note.json"], None);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
