use clap::Parser;
use rift_scope::cli::{run, Cli, Report};
use rift_scope::error::{Result, ScopeError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run_on(dir: &Path, name: &str, text: &str, args: &[&str]) -> Result<Report> {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    let path = path.to_string_lossy().to_string();
    let mut argv = vec!["rift-scope", path.as_str()];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_move_words_with_repeat() {
    let dir = tempdir().unwrap();
    let report = run_on(dir.path(), "a.txt", "foo bar baz", &["move", "--repeat", "3"]).unwrap();
    assert_eq!(report.text, None);
    assert_eq!(report.selections.to_string(), "11");
}

#[test]
fn test_transpose_words() {
    let dir = tempdir().unwrap();
    let report = run_on(
        dir.path(),
        "a.txt",
        "one two three",
        &["transpose", "-c", "1"],
    )
    .unwrap();
    assert_eq!(report.text.as_deref(), Some("two one three"));
    assert_eq!(report.selections.to_string(), "5");
}

#[test]
fn test_indent_with_spaces() {
    let dir = tempdir().unwrap();
    let report = run_on(
        dir.path(),
        "a.cfg",
        "def f():\n  x\n",
        &[
            "indent",
            "--by",
            "functions",
            "-l",
            "indentation",
            "-c",
            "10",
            "--set",
            "translate_tabs_to_spaces=true",
            "--set",
            "tab_size=2",
        ],
    )
    .unwrap();
    assert_eq!(report.text.as_deref(), Some("  def f():\n    x\n"));
    assert_eq!(report.selections.to_string(), "14");
}

#[test]
fn test_nudge_selection() {
    let dir = tempdir().unwrap();
    let report = run_on(dir.path(), "a.txt", "abc", &["nudge", "-c", "0:1"]).unwrap();
    assert_eq!(report.text.as_deref(), Some("bac"));
    assert_eq!(report.selections.to_string(), "1:2");
    assert_eq!(report.to_string(), "bac\nselections: 1:2");
}

#[test]
fn test_delete_list_item() {
    let dir = tempdir().unwrap();
    let report = run_on(
        dir.path(),
        "a.txt",
        "f(a, bb, ccc)",
        &["move", "--by", "listitems", "--delete", "-c", "6"],
    )
    .unwrap();
    assert_eq!(report.text.as_deref(), Some("f(a, , ccc)"));
    assert_eq!(report.selections.to_string(), "5");
}

#[test]
fn test_errors_are_reported() {
    let dir = tempdir().unwrap();
    let err = run(&Cli::try_parse_from(["rift-scope", "/nonexistent/file.txt", "move"]).unwrap())
        .unwrap_err();
    assert_eq!(err.code, "IO_ERROR");

    let err: ScopeError =
        run_on(dir.path(), "a.txt", "x", &["move", "--set", "tab_size=0"]).unwrap_err();
    assert_eq!(err.code, "SETTING_VALIDATION_ERROR");

    let err = run_on(dir.path(), "a.txt", "x", &["move", "--by", "paragraphs"]).unwrap_err();
    assert_eq!(err.code, "UNKNOWN_REGION_KIND");

    let err = run_on(dir.path(), "a.txt", "x", &["move", "-c", "one"]).unwrap_err();
    assert_eq!(err.code, "INVALID_CURSOR");
}
