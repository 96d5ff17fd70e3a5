//! Integration tests for the fenci CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write the standard test fixtures into a temp dir
fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let dict = dir.join("dict.txt");
    let stopwords = dir.join("stopwords.txt");
    let corpus = dir.join("corpus.txt");

    fs::write(&dict, "中国\n人\n北京\n").unwrap();
    fs::write(&stopwords, "的\n").unwrap();
    fs::write(&corpus, "中国人民\n北京的天气\n").unwrap();

    (dict, stopwords, corpus)
}

fn fenci() -> Command {
    Command::cargo_bin("fenci").unwrap()
}

#[test]
fn test_segment_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, corpus) = write_fixtures(temp_dir.path());

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("[中国][人][民]"))
        .stdout(predicate::str::contains("[北京][天][气]"));
}

#[test]
fn test_segmented_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, corpus) = write_fixtures(temp_dir.path());
    let segmented = temp_dir.path().join("segmented.txt");

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("--segmented")
        .arg(&segmented)
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(&segmented).unwrap();
    assert_eq!(content, "[中国][人][民]\n[北京][天][气]\n");
}

#[test]
fn test_ranking_report_format() {
    let temp_dir = TempDir::new().unwrap();
    let dict = temp_dir.path().join("dict.txt");
    let stopwords = temp_dir.path().join("stopwords.txt");
    let corpus = temp_dir.path().join("corpus.txt");
    let report = temp_dir.path().join("report.txt");

    fs::write(&dict, "人\n国\n").unwrap();
    fs::write(&stopwords, "").unwrap();
    // 人 three times, 国 once, total 4
    fs::write(&corpus, "人人国\n人\n").unwrap();

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("人 => 3 (0.7500)\n"));
    assert!(content.contains("国 => 1 (0.2500)"));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, corpus) = write_fixtures(temp_dir.path());

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("-f")
        .arg("json")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\""))
        .stdout(predicate::str::contains("\"count\""))
        .stdout(predicate::str::contains("\"frequency\""));
}

#[test]
fn test_top_limits_report_length() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, corpus) = write_fixtures(temp_dir.path());
    let report = temp_dir.path().join("report.txt");

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("-o")
        .arg(&report)
        .arg("--top")
        .arg("1")
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_missing_dictionary_fails_before_segmenting() {
    let temp_dir = TempDir::new().unwrap();
    let (_, stopwords, corpus) = write_fixtures(temp_dir.path());
    let segmented = temp_dir.path().join("segmented.txt");

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(temp_dir.path().join("missing.txt"))
        .arg("-s")
        .arg(&stopwords)
        .arg("--segmented")
        .arg(&segmented)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    // No partial output: the run aborted before segmentation
    assert!(!segmented.exists());
}

#[test]
fn test_missing_stopwords_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, _, corpus) = write_fixtures(temp_dir.path());

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(temp_dir.path().join("missing.txt"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_oversized_dictionary_entry_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (_, stopwords, corpus) = write_fixtures(temp_dir.path());
    let dict = temp_dir.path().join("dict.txt");

    // Nine ideographs exceed the 21-byte matching window
    fs::write(&dict, "中华人民共和国万岁\n").unwrap();

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid lexicon"));
}

#[test]
fn test_validate_reports_counts() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, corpus) = write_fixtures(temp_dir.path());

    fenci()
        .arg("validate")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .assert()
        .success()
        .stdout(predicate::str::contains("dictionary: 3 entries"))
        .stdout(predicate::str::contains("stopwords: 1 entries"))
        .stdout(predicate::str::contains("corpus: 2 sentences"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_validate_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, _) = write_fixtures(temp_dir.path());

    fenci()
        .arg("validate")
        .arg("-i")
        .arg(temp_dir.path().join("missing.txt"))
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .assert()
        .failure();
}

#[test]
fn test_help_command() {
    fenci()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chinese word segmentation"));
}

#[test]
fn test_empty_corpus_line_yields_empty_output_line() {
    let temp_dir = TempDir::new().unwrap();
    let (dict, stopwords, _) = write_fixtures(temp_dir.path());
    let corpus = temp_dir.path().join("corpus.txt");
    let segmented = temp_dir.path().join("segmented.txt");

    fs::write(&corpus, "，。\n中国\n").unwrap();

    fenci()
        .arg("segment")
        .arg("-i")
        .arg(&corpus)
        .arg("-d")
        .arg(&dict)
        .arg("-s")
        .arg(&stopwords)
        .arg("--segmented")
        .arg(&segmented)
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(&segmented).unwrap();
    assert_eq!(content, "\n[中国]\n");
}
