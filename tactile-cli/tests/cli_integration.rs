//! Integration tests for the tactile CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn tactile() -> Command {
    Command::cargo_bin("tactile").unwrap()
}

#[test]
fn test_convert_inline_grade1() {
    tactile()
        .args(["convert", "-t", "cat"])
        .assert()
        .success()
        .stdout("⠉⠁⠞\n");
}

#[test]
fn test_convert_inline_grade2() {
    tactile()
        .args(["convert", "-t", "AND", "-g", "grade2"])
        .assert()
        .success()
        .stdout("⠯\n");
}

#[test]
fn test_whole_word_only_at_boundaries() {
    tactile()
        .args(["convert", "-t", "the cat theory", "-g", "grade2"])
        .assert()
        .success()
        .stdout("⠮ ⠉⠁⠞ ⠹⠑⠕⠗⠽\n");
}

#[test]
fn test_convert_file_grade2() {
    tactile()
        .args(["convert", "-i", &fixture_path("knowledge.txt"), "-g", "grade2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⠾ ⠅\n⠿ ⠮ ⠏"));
}

#[test]
fn test_spaced_output() {
    tactile()
        .args(["convert", "-t", "cat", "--spaced"])
        .assert()
        .success()
        .stdout("⠉ ⠁ ⠞\n");
}

#[test]
fn test_no_visual_ignores_spacing() {
    tactile()
        .args(["convert", "-t", "cat", "--spaced", "--no-visual"])
        .assert()
        .success()
        .stdout("⠉⠁⠞\n");
}

#[test]
fn test_json_output() {
    let output = tactile()
        .args(["convert", "-t", "cat", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let document = &value[0];
    assert_eq!(document["source"], "inline");
    assert_eq!(document["braille"], "⠉⠁⠞");
    assert_eq!(document["success"], true);
    assert_eq!(document["stats"]["originalLength"], 3);
    assert_eq!(document["stats"]["wordCount"], 1);
    assert_eq!(document["stats"]["lineCount"], 1);
    assert_eq!(document["stats"]["grade"], "grade1");
    assert_eq!(document["stats"]["compressionRatio"], "1.00");
}

#[test]
fn test_brf_output() {
    tactile()
        .args(["convert", "-t", "and", "-g", "grade2", "-f", "brf"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⠃⠗⠇ ⠋⠊⠇⠑ ⠛⠑⠝⠑⠗⠁⠞⠫ "))
        .stdout(predicate::str::contains("⠛⠗⠁⠙⠑ ⠼⠃\n"))
        .stdout(predicate::str::contains("⠤".repeat(20)))
        .stdout(predicate::str::ends_with("\n\n⠯\n"));
}

#[test]
fn test_glob_pattern_keeps_order() {
    let output = tactile()
        .args(["convert", "-q", "-i", &fixture_path("*.txt"), "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sources: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["source"].as_str().unwrap())
        .collect();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("cat.txt"));
    assert!(sources[1].ends_with("knowledge.txt"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.brf");

    tactile()
        .args(["convert", "-i", &fixture_path("cat.txt"), "-f", "brf", "-o"])
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("⠛⠗⠁⠙⠑ ⠼⠁"));
    assert!(content.contains("⠞⠓⠑ ⠉⠁⠞ ⠎⠁⠞⠲"));
}

#[test]
fn test_config_file_sets_defaults() {
    tactile()
        .args(["convert", "-t", "the cat", "-c", &fixture_path("grade2-config.toml")])
        .assert()
        .success()
        .stdout("⠮ ⠉⠁⠞\n");

    // flag wins over config
    tactile()
        .args([
            "convert",
            "-t",
            "the",
            "-g",
            "grade1",
            "-c",
            &fixture_path("grade2-config.toml"),
        ])
        .assert()
        .success()
        .stdout("⠞⠓⠑\n");
}

#[test]
fn test_custom_table() {
    tactile()
        .args([
            "convert",
            "-t",
            "abba ab c",
            "-g",
            "grade2",
            "--table-config",
            &fixture_path("custom-table.toml"),
        ])
        .assert()
        .success()
        .stdout("⠿ ⠷ c\n");
}

#[test]
fn test_invalid_file() {
    tactile()
        .args(["convert", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_empty_text_rejected() {
    tactile()
        .args(["convert", "-t", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Text is required and must be a string",
        ));
}

#[test]
fn test_too_long_text_rejected() {
    let text = "a".repeat(50_001);
    tactile()
        .args(["convert", "-t", &text])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Text is too long. Maximum 50,000 characters allowed.",
        ));
}

#[test]
fn test_unknown_grade_rejected() {
    tactile()
        .args(["convert", "-t", "cat", "-g", "grade3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grade3"));
}

#[test]
fn test_list_grades() {
    tactile()
        .args(["list", "grades"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade 1 (Uncontracted)"))
        .stdout(predicate::str::contains("Grade 2 (Contracted)"));
}

#[test]
fn test_list_formats() {
    tactile()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brf"))
        .stdout(predicate::str::contains(".txt"));
}

#[test]
fn test_validate_custom_table() {
    tactile()
        .args(["validate", "-c", &fixture_path("custom-table.toml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Tables are valid!"))
        .stdout(predicate::str::contains("Characters: 3"))
        .stdout(predicate::str::contains(
            "Contractions: 2 (1 whole-word, 1 letter-group)",
        ));
}

#[test]
fn test_validate_invalid_table() {
    tactile()
        .args(["validate", "-c", &fixture_path("invalid-table.toml")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Tables are invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_help() {
    tactile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"));
}
