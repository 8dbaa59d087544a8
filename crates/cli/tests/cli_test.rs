//! End-to-end tests for the build-squad binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn build_squad(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("build-squad").expect("Binary not built");
    cmd.current_dir(dir)
        .env_remove("SQUAD_TITLE")
        .env_remove("SQUAD_VERSION");
    cmd
}

fn write_input(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("training.tsv");
    std::fs::write(&path, content).expect("Failed to write input");
    (dir, path)
}

fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("Output file missing");
    serde_json::from_str(&text).expect("Output is not JSON")
}

#[test]
fn test_converts_next_to_input() {
    let (dir, input) = write_input(
        "What color is the sky?\tThe sky is blue during the day.\n\
         Why is the sky blue?\tThe sky is blue during the day.\n\
         \n\
         What is the capital of France?\tParis is the capital of France.\n",
    );

    build_squad(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 paragraphs (3 questions)"));

    let json = read_json(&dir.path().join("training.json"));
    assert_eq!(json["version"], "1.1");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "First Set of Paragraphs");

    let paragraphs = json["data"][0]["paragraphs"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0]["qas"].as_array().unwrap().len(), 2);
    assert_eq!(paragraphs[1]["context"], "Paris is the capital of France.");

    let id = paragraphs[1]["qas"][0]["id"].as_str().unwrap();
    assert_eq!(id.len(), 32);
    assert!(paragraphs[1]["qas"][0].get("answers").is_none());
}

#[test]
fn test_output_and_title_flags() {
    let (dir, input) = write_input("Q1\tHello World\nQ2\thello world\n");
    let output = dir.path().join("nested.json");

    build_squad(dir.path())
        .arg(&input)
        .args(["--output", "nested.json", "--title", "Greetings", "--pretty"])
        .assert()
        .success();

    let json = read_json(&output);
    assert_eq!(json["data"][0]["title"], "Greetings");
    let paragraphs = json["data"][0]["paragraphs"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0]["context"], "Hello World");
    assert!(!dir.path().join("training.json").exists());
}

#[test]
fn test_title_from_env() {
    let (dir, input) = write_input("Q\tC\n");

    build_squad(dir.path())
        .env("SQUAD_TITLE", "From Env")
        .arg(&input)
        .assert()
        .success();

    let json = read_json(&dir.path().join("training.json"));
    assert_eq!(json["data"][0]["title"], "From Env");
}

#[test]
fn test_usage_error_without_argument() {
    let dir = tempfile::tempdir().unwrap();

    build_squad(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_usage_error_with_two_arguments() {
    let dir = tempfile::tempdir().unwrap();

    build_squad(dir.path())
        .args(["a.tsv", "b.tsv"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    build_squad(dir.path())
        .arg("nope.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOT found"));

    assert!(!dir.path().join("nope.json").exists());
}

#[test]
fn test_empty_input() {
    let (dir, input) = write_input("\n\n   \n");

    build_squad(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions and context paragraphs"));

    assert!(!dir.path().join("training.json").exists());
}

#[test]
fn test_malformed_input() {
    let (dir, input) = write_input("Q1\tC1\nnot a pair\n");

    build_squad(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!dir.path().join("training.json").exists());
}
