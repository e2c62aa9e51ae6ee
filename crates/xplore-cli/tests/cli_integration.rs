//! CLI Integration Tests
//!
//! These tests run the `xplore` binary end-to-end against the built-in
//! catalog and against catalog files written to temporary directories.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// CLI command isolated from any config in the user's config directory
fn cli_cmd(dir: &TempDir) -> Command {
    let config = dir.path().join("config.json");
    if !config.exists() {
        std::fs::write(&config, "{}").unwrap();
    }
    let mut cmd = Command::cargo_bin("xplore").expect("Failed to find xplore binary");
    cmd.arg("--config").arg(&config);
    cmd
}

const SMALL_CATALOG: &str = r#"{
  "name": "Mini Fest",
  "items": [
    { "id": 1, "title": "Redstone Relay", "image_ref": "/assets/r.png", "description": "Wire it up.", "category": "Hardware" },
    { "id": 2, "title": "Ender Sprint", "image_ref": "/assets/e.png", "description": "Run.", "category": "Sports" }
  ],
  "details": [
    {
      "id": 1,
      "poster_ref": "/assets/r_poster.png",
      "registration_url": "https://forms.gle/redstone",
      "rules": [ { "heading": "Format", "tone": "format", "points": ["Teams of two"] } ]
    }
  ]
}"#;

fn write_catalog(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xplore'25"))
        .stdout(predicate::str::contains("Events: 8"))
        .stdout(predicate::str::contains("Reveal delay: 5000 ms"))
        .stdout(predicate::str::contains("Catalog: built-in"));
}

#[test]
fn test_info_respects_reveal_delay_flag() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["--reveal-delay-ms", "2500", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reveal delay: 2500 ms"));
}

#[test]
fn test_info_rejects_zero_delay() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["--reveal-delay-ms", "0", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reveal_delay_ms"));
}

// ============================================================================
// Events Command Tests
// ============================================================================

#[test]
fn test_events_list() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#01  Battle of the Biomes  [Head-to-Head Coding]"))
        .stdout(predicate::str::contains("#05  Diamond Docs  [Paper Presentation]"))
        .stdout(predicate::str::contains("#08"));
}

#[test]
fn test_events_show() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["events", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#03 Capture the Craft Table"))
        .stdout(predicate::str::contains("Category: CTF"))
        .stdout(predicate::str::contains("Register: https://forms.gle/"))
        .stdout(predicate::str::contains("Winning Criteria:"));
}

#[test]
fn test_events_show_unknown_id() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["events", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found"));
}

// ============================================================================
// Links Command Tests
// ============================================================================

#[test]
fn test_links() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("#01 Battle of the Biomes -> https://forms.gle/8HK38gcdaHy8Gebs6"));
}

#[test]
fn test_links_without_form() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "mini.json", SMALL_CATALOG);

    cli_cmd(&dir)
        .arg("--catalog")
        .arg(&catalog)
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("#01 Redstone Relay -> https://forms.gle/redstone"))
        .stdout(predicate::str::contains("#02 Ender Sprint -> (no form)"));
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_catalog_validate_ok() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "mini.json", SMALL_CATALOG);

    cli_cmd(&dir)
        .args(["catalog", "validate"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 2 events"));
}

#[test]
fn test_catalog_validate_duplicate_id() {
    let dir = TempDir::new().unwrap();
    let json = SMALL_CATALOG.replace("\"id\": 2", "\"id\": 1");
    let catalog = write_catalog(&dir, "dup.json", &json);

    cli_cmd(&dir)
        .args(["catalog", "validate"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate item id: 1"));
}

#[test]
fn test_catalog_validate_missing_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["catalog", "validate"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog"));
}

#[test]
fn test_catalog_export_round_trips() {
    let dir = TempDir::new().unwrap();

    let output = cli_cmd(&dir)
        .args(["catalog", "export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let exported = write_catalog(&dir, "exported.json", &String::from_utf8(output).unwrap());

    cli_cmd(&dir)
        .arg("--catalog")
        .arg(&exported)
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#07  Nether Quest 2.0  [Treasure Hunt]"));
}

// ============================================================================
// Play Command Tests
// ============================================================================

#[test]
fn test_play_reveal_then_open() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["play", "tap:3", "tap:3", "close"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tap:3      revealed revealed=[3] slide=0 selection=- countdown=running"))
        .stdout(predicate::str::contains("tap:3      opened   revealed=[3] slide=0 selection=3 countdown=running"))
        .stdout(predicate::str::contains("close      closed   revealed=[3] slide=0 selection=- countdown=running"));
}

#[test]
fn test_play_unknown_id_is_ignored() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["play", "tap:999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored  revealed=[] slide=0 selection=- countdown=idle"));
}

#[test]
fn test_play_reveals_expire() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["--reveal-delay-ms", "50", "play", "tap:1", "tap:2", "wait:400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wait:400   waited   revealed=[] slide=0 selection=- countdown=idle"));
}

#[test]
fn test_play_slider_wraps() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["play", "prev", "go:99", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prev       prev     revealed=[] slide=7"))
        .stdout(predicate::str::contains("go:99      go       revealed=[] slide=7"))
        .stdout(predicate::str::contains("next       next     revealed=[] slide=0"));
}

#[test]
fn test_play_rejects_bad_step() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["play", "jump:3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step"));
}
