use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("tfidf-neighbors").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TFIDF_NEIGHBORS_LOG");
    cmd
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("papers.json");
    fs::write(
        &path,
        r#"[
  {"Title": "A", "Summary": "cats are animals"},
  {"Title": "B", "Summary": "dogs are animals"},
  {"Title": "C", "Summary": "quantum physics"}
]"#,
    )
    .unwrap();
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path());
    (dir, corpus)
}

#[test]
fn lists_neighbors_by_title() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--id", "A", "-k", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 Similar Papers to \"A\""))
        .stdout(predicate::str::contains("1. B ("))
        .stdout(predicate::str::contains("C (").not());
}

#[test]
fn json_output_by_index() {
    let (_dir, corpus) = setup();
    let output = bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--index", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["query"], "C");
    assert_eq!(body["k"], 5);
    let neighbors = body["neighbors"].as_array().unwrap();
    assert_eq!(neighbors.len(), 2);
    assert_eq!(neighbors[0]["identifier"], "A");
    assert_eq!(neighbors[0]["score"], 0.0);
}

#[test]
fn free_text_query() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--text", "quantum", "-k", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. C ("));
}

#[test]
fn interactive_loop_until_quit() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .write_stdin("B\nnope\nquit\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Similar Papers to \"B\""))
        .stdout(predicate::str::contains("Similar Papers to \"A\"").not())
        .stderr(predicate::str::contains("unknown document identifier"));
}

#[test]
fn unknown_title_fails() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--id", "Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown document identifier"));
}

#[test]
fn zero_k_fails() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--index", "0", "-k", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid neighbor count"));
}

#[test]
fn duplicate_titles_fail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dup.jsonl");
    fs::write(
        &path,
        "{\"title\": \"X\", \"summary\": \"one\"}\n{\"title\": \"X\", \"summary\": \"two\"}\n",
    )
    .unwrap();
    bin()
        .arg("--corpus")
        .arg(&path)
        .args(["--index", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate document identifier"));
}

#[test]
fn config_file_sets_default_k() {
    let (dir, corpus) = setup();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[ranking]\ndefault_k = 1\n").unwrap();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .arg("--config")
        .arg(&config)
        .args(["--id", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 Similar Papers"));
}

#[test]
fn conflicting_queries_are_usage_errors() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--id", "A", "--index", "1"])
        .assert()
        .code(2);
}

#[test]
fn verbose_logs_to_stderr() {
    let (_dir, corpus) = setup();
    bin()
        .arg("--corpus")
        .arg(&corpus)
        .args(["--id", "A", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("similarity model built"))
        .stdout(predicate::str::contains("similarity model built").not());
}

#[test]
fn interactive_titles_match_exactly_before_stop_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.json");
    fs::write(
        &path,
        r#"[
  {"Title": "exit", "Summary": "cats are animals"},
  {"Title": " padded ", "Summary": "dogs are animals"},
  {"Title": "C", "Summary": "quantum physics"}
]"#,
    )
    .unwrap();
    bin()
        .arg("--corpus")
        .arg(&path)
        .write_stdin("exit\n padded \nC\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Similar Papers to \"exit\""))
        .stdout(predicate::str::contains("Similar Papers to \" padded \""))
        .stdout(predicate::str::contains("Similar Papers to \"C\""));
}
