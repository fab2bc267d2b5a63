use assert_cmd::prelude::*;

use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use assert_cmd::Command;

fn marginalia_cmd() -> Command {
    Command::cargo_bin("marginalia").expect("binary exists")
}

#[test]
fn test_parse_command_formats_insights() {
    let temp = assert_fs::TempDir::new().unwrap();
    let content = temp.child("content.txt");
    content
        .write_str(
            "Key Insights:\n1. Start small and build momentum.\n________________\n\
             Ready to put it into practice:\n• Journaling in: the evening before bed\n",
        )
        .unwrap();

    marginalia_cmd()
        .args([
            "parse",
            content.path().to_str().unwrap(),
            "--title",
            "Tiny Habits",
            "--category",
            "Personal Growth",
        ])
        .assert()
        .success()
        .stdout(
            contains("Tiny Habits")
                .and(contains("Start small and build momentum."))
                .and(contains("Journaling-in: the evening before bed")),
        );
}

#[test]
fn test_parse_command_json_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let content = temp.child("content.txt");
    content.write_str("Key Insights:\n1. A takeaway for the JSON surface\n").unwrap();

    let output = marginalia_cmd()
        .args([
            "parse",
            content.path().to_str().unwrap(),
            "--title",
            "Any",
            "--category",
            "Productivity",
            "--json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["content_source"], "database");
    assert_eq!(parsed["key_points"][0], "A takeaway for the JSON surface");
}

#[test]
fn test_parse_command_reads_stdin() {
    marginalia_cmd()
        .args(["parse", "-", "--title", "Stdin Book", "--category", "Philosophy"])
        .write_stdin("Key Insights:\n1. Piped content parses the same way\n")
        .assert()
        .success()
        .stdout(contains("Piped content parses the same way"));
}

#[test]
fn test_parse_command_missing_file_fails() {
    marginalia_cmd()
        .args(["parse", "/definitely/not/a/file", "--title", "X", "--category", "Y"])
        .assert()
        .failure();
}

#[test]
fn test_empty_content_falls_back_to_category() {
    let temp = assert_fs::TempDir::new().unwrap();
    let content = temp.child("empty.txt");
    content.write_str("   ").unwrap();

    marginalia_cmd()
        .args([
            "parse",
            content.path().to_str().unwrap(),
            "--title",
            "Empty Book",
            "--category",
            "Leadership",
        ])
        .assert()
        .success()
        .stdout(contains("fallback").and(contains("Trust is built through consistency")));
}

#[test]
fn test_categories_command_lists_table() {
    marginalia_cmd()
        .args(["categories"])
        .assert()
        .success()
        .stdout(contains("Personal Growth").and(contains("Productivity")).and(contains("Philosophy")));
}

#[test]
fn test_fallback_command_unknown_category_defaults() {
    marginalia_cmd()
        .args(["fallback", "Underwater Basket Weaving"])
        .assert()
        .success()
        .stdout(contains("Growth starts with honest self-assessment"));
}
