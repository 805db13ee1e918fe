use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shelflife(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelflife").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

#[test]
fn extract_reads_stdin() {
    let home = TempDir::new().unwrap();

    let output = shelflife(home.path())
        .args(["extract", "--today", "2024-01-01"])
        .write_stdin("ORDER 2020-01-01\n".to_string() + &"\n".repeat(40) + "EXP 2099-12-31\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["filename"], serde_json::Value::Null);
    assert_eq!(value["expiry"]["expiry_date"], "2099-12-31");
    assert_eq!(value["expiry"]["confidence"], 0.5);
    assert_eq!(value["expiry"]["candidates"].as_array().unwrap().len(), 2);
}

#[test]
fn extract_text_format_from_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("yogurt.txt");
    fs::write(&input, "Strawberry yogurt\nbest before 20/06/2025\n").unwrap();

    shelflife(home.path())
        .args(["extract", "--today", "2025-01-01", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: yogurt.txt"))
        .stdout(predicate::str::contains("Expiry date: 2025-06-20"));
}

#[test]
fn extract_repairs_ocr_digits() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["extract", "--today", "2024-01-01", "--format", "text"])
        .write_stdin("EXP 2O25-01-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiry date: 2025-01-15"));
}

#[test]
fn extract_without_dates_is_not_an_error() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["extract", "--today", "2024-01-01", "--format", "text"])
        .write_stdin("KEEP REFRIGERATED")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiry date: not found"));
}

#[test]
fn extract_rejects_malformed_today() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["extract", "--today", "2024-02-30"])
        .write_stdin("EXP 2025-01-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn extract_missing_file_fails() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["extract", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let home = TempDir::new().unwrap();
    let inputs = home.path().join("labels");
    let outputs = home.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("milk.txt"), "USE BY 12 JAN 2024").unwrap();
    fs::write(inputs.join("receipt.txt"), "TOTAL 4.99 VISA APPROVED").unwrap();
    fs::write(inputs.join("photo.png"), "not text").unwrap();

    let pattern = format!("{}/*", inputs.display());
    shelflife(home.path())
        .args(["batch", &pattern, "--today", "2024-01-01", "--summary", "--output-dir"])
        .arg(&outputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    let milk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outputs.join("milk.json")).unwrap()).unwrap();
    assert_eq!(milk["expiry"]["expiry_date"], "2024-01-12");

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "file,expiry_date,confidence,raw,error");
    assert_eq!(lines[1], "milk.txt,2024-01-12,0.625,12 JAN 2024,");
    assert_eq!(lines[2], "receipt.txt,,0.000,,");
}

#[test]
fn batch_without_matches_fails() {
    let home = TempDir::new().unwrap();
    let pattern = format!("{}/*.txt", home.path().display());

    shelflife(home.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_set_changes_scoring() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["config", "init"])
        .assert()
        .success();

    shelflife(home.path())
        .args(["config", "get", "scoring.keyword_bonus"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));

    shelflife(home.path())
        .args(["config", "set", "scoring.keyword_bonus", "6"])
        .assert()
        .success();

    shelflife(home.path())
        .args(["config", "get", "scoring.keyword_bonus"])
        .assert()
        .success()
        .stdout(predicate::str::diff("6\n"));

    // EXP +6 with the new weight maps to full confidence.
    shelflife(home.path())
        .args(["extract", "--today", "2024-01-01"])
        .write_stdin("EXP 2025-01-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"confidence\": 1.0"));
}

#[test]
fn config_set_rejects_unknown_key_and_invalid_values() {
    let home = TempDir::new().unwrap();

    shelflife(home.path())
        .args(["config", "set", "scoring.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration key"));

    shelflife(home.path())
        .args(["config", "set", "scoring.max_candidates", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_candidates"));
}

#[test]
fn config_show_and_explicit_path() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("custom").join("weights.json");

    shelflife(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("EXP, EXPIRES, EXPIRY"));

    shelflife(home.path())
        .arg("--config")
        .arg(&config_file)
        .args(["config", "set", "scoring.expiry_keywords", "exp,peremption"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_file).unwrap()).unwrap();
    assert_eq!(saved["scoring"]["expiry_keywords"], serde_json::json!(["EXP", "PEREMPTION"]));

    shelflife(home.path())
        .arg("--config")
        .arg(&config_file)
        .args(["extract", "--today", "2024-01-01", "--format", "text"])
        .write_stdin("PEREMPTION 12/03/2025")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expiry date: 2025-03-12"))
        .stdout(predicate::str::contains("Confidence: 62.5%"));
}
