//! End-to-end tests driving the compiled binary against a temporary document

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_changelog-cli");
    Command::new(cli_bin)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run CLI")
}

fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run(dir, args);
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_fresh_document_has_one_page_and_no_changelog() {
    let temp_dir = TempDir::new().unwrap();

    let pages = run_ok(temp_dir.path(), &["pages"]);
    assert!(pages.contains("Page 1"), "unexpected output: {}", pages);

    let check = run_ok(temp_dir.path(), &["check"]);
    assert!(check.contains("no changelog"), "unexpected output: {}", check);

    let render = run_ok(temp_dir.path(), &["render"]);
    assert!(render.starts_with("No changelog on page"));
}

#[test]
fn test_submissions_accumulate_and_persist() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let first = run_ok(
        dir,
        &[
            "submit",
            "--title",
            "Login flow",
            "--description",
            "New screens",
            "--change-type",
            "New Feature",
            "--user",
            "Ana Souza",
        ],
    );
    assert!(first.contains("(1 entries)"), "unexpected output: {}", first);
    assert!(dir.join(".changelog/document.json").exists());

    let second = run_ok(
        dir,
        &["submit", "--title", "Fix crash", "--change-type", "Bug Fix"],
    );
    assert!(second.contains("(2 entries)"), "unexpected output: {}", second);

    let check = run_ok(dir, &["check"]);
    assert!(check.contains("changelog with 2 entries"));

    let outline = run_ok(dir, &["render"]);
    assert!(outline.contains("\"Changelog\""));
    assert!(outline.contains("\"Fix crash\""));
    assert!(outline.contains("\"Login flow\""));
    let newest = outline.find("Fix crash").unwrap();
    let oldest = outline.find("Login flow").unwrap();
    assert!(newest < oldest, "newest entry must come first");
}

#[test]
fn test_submit_to_other_page() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let added = run_ok(dir, &["page", "add", "Release notes"]);
    assert!(added.contains("0:2"), "unexpected output: {}", added);

    run_ok(
        dir,
        &[
            "submit",
            "--page",
            "0:2",
            "--title",
            "Cleanup",
            "--change-type",
            "Refactoring",
        ],
    );

    let pages = run_ok(dir, &["pages"]);
    assert!(pages.contains("* 0:2"), "second page should be current: {}", pages);

    let first_page = run_ok(dir, &["check", "--page", "0:1"]);
    assert!(first_page.contains("no changelog"));
}

#[test]
fn test_submit_without_title_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        temp_dir.path(),
        &["submit", "--title", "   ", "--change-type", "Update"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_config_renames_container() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    std::fs::write(dir.join("changelog.toml"), "container_name = \"Release Log\"\n").unwrap();

    run_ok(
        dir,
        &[
            "--config",
            "changelog.toml",
            "submit",
            "--title",
            "Tokens",
            "--change-type",
            "Update",
        ],
    );

    let outline = run_ok(dir, &["--config", "changelog.toml", "render", "--output", "out.txt"]);
    assert!(outline.contains("✓ Rendered to out.txt"));
    let written = std::fs::read_to_string(dir.join("out.txt")).unwrap();
    assert!(written.contains("\"Release Log\""));
}
