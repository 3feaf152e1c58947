//! Tests for match configuration loading.

use std::fs;
use tempfile::TempDir;

use strictly_minimax::{MatchConfig, PlayerKind, SeatConfig};

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("match.toml");
    fs::write(
        &path,
        r#"
[x]
kind = "first-free"
name = "Baseline"

[o]
kind = "minimax"
"#,
    )
    .expect("Failed to write TOML");

    let config = MatchConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.x().kind(), PlayerKind::FirstFree);
    assert_eq!(config.x().display_name(), "Baseline");
    assert_eq!(*config.o().kind(), PlayerKind::Minimax);
    assert_eq!(config.o().display_name(), "Minimax");
}

#[test]
fn test_missing_seats_use_defaults() {
    let config = MatchConfig::from_toml("").expect("Empty config is valid");
    assert_eq!(config, MatchConfig::default());
    assert_eq!(*config.x().kind(), PlayerKind::Human);
    assert_eq!(*config.o().kind(), PlayerKind::Minimax);
}

#[test]
fn test_invalid_kind_is_an_error() {
    let err = MatchConfig::from_toml("[x]\nkind = \"oracle\"\n").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_command_line_overrides() {
    let config = MatchConfig::new(
        SeatConfig::new(PlayerKind::Human).with_name("Ada"),
        SeatConfig::new(PlayerKind::Minimax).with_name("Deep"),
    )
    .override_kinds(Some(PlayerKind::Human), Some(PlayerKind::FirstFree));

    assert_eq!(config.x().display_name(), "Ada");
    assert_eq!(*config.o().kind(), PlayerKind::FirstFree);
    assert_eq!(config.o().display_name(), "First-free");
}
