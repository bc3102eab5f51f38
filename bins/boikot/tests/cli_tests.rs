//! Command-line integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = "\
DAFTAR PRODUK
Nestle boikot Makanan
Indofood Tidak Makanan
Aqua Tidak Minuman
";

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Produk.txt"), DOCUMENT).unwrap();
    dir
}

fn boikot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boikot").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BOIKOT_CONFIG")
        .env_remove("BOIKOT_DOCUMENT")
        .env_remove("RUST_LOG")
        .args(["--document", "Produk.txt"]);
    cmd
}

#[test]
fn test_check_boycotted_brand() {
    let dir = workspace();
    boikot(&dir)
        .args(["check", "Nestle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nestle"))
        .stdout(predicate::str::contains("BOIKOT"))
        .stdout(predicate::str::contains("Indofood"));
}

#[test]
fn test_check_safe_brand() {
    let dir = workspace();
    boikot(&dir)
        .args(["check", "indofood"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AMAN"))
        .stdout(predicate::str::contains("Status: Tidak"));
}

#[test]
fn test_check_typo_suggests() {
    let dir = workspace();
    boikot(&dir)
        .args(["check", "Nestel"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Brand tidak ditemukan."))
        .stdout(predicate::str::contains("Did you mean: Nestle?"));
}

#[test]
fn test_check_json_output() {
    let dir = workspace();
    let output = boikot(&dir)
        .args(["--format", "json", "check", "Nestle"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "accepted");
    assert_eq!(json["matched_name"], "Nestle");
    assert_eq!(json["status_class"], "boikot");
    assert_eq!(json["recommendations"], serde_json::json!(["Indofood"]));
}

#[test]
fn test_check_joins_words() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Produk.txt"),
        "Coca Cola boikot Minuman\nAqua Tidak Minuman\n",
    )
    .unwrap();

    boikot(&dir)
        .args(["check", "coca", "cola"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coca Cola"));
}

#[test]
fn test_missing_document_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    boikot(&dir)
        .args(["check", "Nestle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File PDF tidak valid atau tidak ditemukan."));
}

#[test]
fn test_directory_document_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("Produk.txt")).unwrap();

    boikot(&dir)
        .args(["check", "Nestle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File PDF tidak valid atau tidak ditemukan."));
}

#[test]
fn test_records_lists_parsed_lines() {
    let dir = workspace();
    boikot(&dir)
        .arg("records")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aqua"))
        .stdout(predicate::str::contains("3 records"))
        .stdout(predicate::str::contains("DAFTAR").not());
}

#[test]
fn test_records_json() {
    let dir = workspace();
    let output = boikot(&dir).args(["-f", "json", "records"]).output().unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["name"], "Nestle");
    assert_eq!(json[0]["category"], "Makanan");
}

#[test]
fn test_interactive_answers_each_line() {
    let dir = workspace();
    let output = boikot(&dir)
        .args(["--format", "json", "interactive"])
        .write_stdin("Nestle\n\nX\nAqua\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["status_class"], "boikot");
    assert_eq!(lines[1]["outcome"], "not_found");
    assert!(lines[1]["fuzzy_suggestion"].is_null());
    assert_eq!(lines[2]["status_class"], "aman");
}

#[test]
fn test_config_threshold_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Produk.txt"),
        "Nestle Pure Life boikot Minuman\nAqua Tidak Minuman\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".boikot.toml"),
        "[matching]\nthreshold = 0.9\n\n[cache]\nenabled = true\n",
    )
    .unwrap();

    // "Pure Life" scores about 0.82 against "Nestle Pure Life".
    boikot(&dir).args(["check", "Pure", "Life"]).assert().code(1);
}

#[test]
fn test_invalid_config_exits_with_config_error() {
    let dir = workspace();
    fs::write(dir.path().join("bad.toml"), "[matching]\nthreshold = 3.0\n").unwrap();

    boikot(&dir)
        .args(["--config", "bad.toml", "check", "Nestle"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3003"));
}

#[test]
fn test_check_requires_brand() {
    let dir = workspace();
    boikot(&dir).arg("check").assert().failure();
}
