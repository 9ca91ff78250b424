//! End-to-end tests of the `sv` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sv() -> Command {
    let mut cmd = Command::cargo_bin("sv").unwrap();
    cmd.env_remove("SV_LANG")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// A catalog that defines only one era and no planets.
const PARTIAL_CATALOG: &str = r#"{
  "eras": [
    { "id": "prehistoric", "name": "Prehistoric", "name_vi": "Thời tiền sử", "emoji": "🦕", "color": 4287033260 }
  ],
  "planets": []
}"#;

// -----------------------------------------------------------------------
// eras
// -----------------------------------------------------------------------

#[test]
fn eras_lists_all_four_with_planets() {
    sv().arg("eras")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prehistoric"))
        .stdout(predicate::str::contains("Future"))
        .stdout(predicate::str::contains("animal, color, number"))
        .stdout(predicate::str::contains("action, emotion, travel"));
}

#[test]
fn eras_in_vietnamese() {
    sv().args(["--lang", "vi", "eras"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thời tiền sử"))
        .stdout(predicate::str::contains("Tương lai"));
}

#[test]
fn unknown_language_is_rejected() {
    sv().args(["--lang", "FR", "eras"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language: \"FR\""));
}

#[test]
fn language_from_environment() {
    sv().env("SV_LANG", "vi")
        .arg("eras")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thời Trung cổ"));
}

#[test]
fn no_color_environment_disables_highlighting() {
    sv().env("NO_COLOR", "1")
        .args(["zone", "animal", "farm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The cow is big."))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

// -----------------------------------------------------------------------
// planets
// -----------------------------------------------------------------------

#[test]
fn planets_lists_all_twelve() {
    sv().arg("planets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Animal Planet"))
        .stdout(predicate::str::contains("Travel Planet"))
        .stdout(predicate::str::contains("12 planets"));
}

#[test]
fn planets_filtered_by_era() {
    sv().args(["planets", "--era", "modern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("School Planet"))
        .stdout(predicate::str::contains("Home Planet"))
        .stdout(predicate::str::contains("Animal Planet").not())
        .stdout(predicate::str::contains("3 planets"));
}

#[test]
fn planets_unknown_era_is_empty() {
    sv().args(["planets", "--era", "jurassic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No planets found."));
}

#[test]
fn planets_with_stars_shows_status() {
    sv().args(["planets", "--stars", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("locked"));
}

// -----------------------------------------------------------------------
// show / zone
// -----------------------------------------------------------------------

#[test]
fn show_planet_lists_zones() {
    sv().args(["--no-color", "show", "animal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Animal Planet"))
        .stdout(predicate::str::contains("farm"))
        .stdout(predicate::str::contains("dino"))
        .stdout(predicate::str::contains("#FF4ADE80"));
}

#[test]
fn show_unknown_planet_suggests() {
    sv().args(["show", "anima"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("planet not found"))
        .stderr(predicate::str::contains("did you mean: animal"));
}

#[test]
fn zone_shows_words_and_sentences() {
    sv().args(["--no-color", "zone", "animal", "farm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Farm Animals"))
        .stdout(predicate::str::contains("con mèo"))
        .stdout(predicate::str::contains("The cow is big."))
        .stdout(predicate::str::contains("Con bò to lớn."));
}

#[test]
fn zone_unknown_lists_valid_zones() {
    sv().args(["zone", "animal", "ocean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zone not found"))
        .stderr(predicate::str::contains("farm, wild, sea"));
}

// -----------------------------------------------------------------------
// search
// -----------------------------------------------------------------------

#[test]
fn search_finds_english_term() {
    sv().args(["search", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("con mèo"))
        .stdout(predicate::str::contains("[animal/farm]"));
}

#[test]
fn search_finds_vietnamese_term() {
    sv().args(["search", "con mèo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat"));
}

#[test]
fn search_with_limit_reports_total() {
    sv().args(["search", "a", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of"));
}

#[test]
fn search_no_results() {
    sv().args(["search", "zzzzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn search_rejects_bad_era() {
    sv().args(["search", "cat", "--era", "jurassic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Use: prehistoric, medieval, modern, future",
        ));
}

// -----------------------------------------------------------------------
// unlocks / stats
// -----------------------------------------------------------------------

#[test]
fn unlocks_at_zero_stars() {
    sv().args(["--no-color", "unlocks", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 planets open at 0 stars"))
        .stdout(predicate::str::contains(
            "Next: 🔢 Number Planet at 10 stars (10 more)",
        ));
}

#[test]
fn unlocks_reports_missing_stars() {
    sv().args(["--no-color", "unlocks", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at 10 stars (6 more)"));
}

#[test]
fn unlocks_everything() {
    sv().args(["unlocks", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 planets open"))
        .stdout(predicate::str::contains("All planets unlocked!"));
}

#[test]
fn stats_plain() {
    sv().arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("planets:    12"))
        .stdout(predicate::str::contains("words:      245"));
}

#[test]
fn stats_json() {
    let output = sv().args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["eras"], 4);
    assert_eq!(stats["zones"], 36);
    assert_eq!(stats["sentences"], 27);
}

// -----------------------------------------------------------------------
// export / check
// -----------------------------------------------------------------------

#[test]
fn export_json_to_file_round_trips_through_check() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("catalog.json");
    sv().args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"animal\""));

    sv().args(["check", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All checks passed (12 planets, 36 zones, 245 words)",
        ));
}

#[test]
fn export_markdown_to_stdout() {
    sv().args(["export", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Space Vocab"))
        .stdout(predicate::str::contains("### 🐾 Animal Planet (`animal`)"));
}

#[test]
fn export_unsupported_format() {
    sv().args(["export", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn check_builtin_passes() {
    sv().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_every_issue() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, PARTIAL_CATALOG).unwrap();

    sv().args(["check", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing era: medieval"))
        .stderr(predicate::str::contains("missing era: future"))
        .stderr(predicate::str::contains("3 content errors"));
}

#[test]
fn check_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    sv().args(["check", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog JSON error"));
}
