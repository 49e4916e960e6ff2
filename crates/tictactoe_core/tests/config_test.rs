//! Tests for loading match configuration from disk.

mod common;

use std::io::Write;
use tictactoe_core::{Match, MatchConfig, PlayerSlot};

#[test]
fn test_config_from_file() -> anyhow::Result<()> {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "player1_name = \"Ada\"")?;
    writeln!(file, "player2_name = \"Grace\"")?;

    let config = MatchConfig::from_file(file.path())?;
    let game = Match::from_config(&config);
    assert_eq!(game.player(PlayerSlot::Player1).name(), "Ada");
    assert_eq!(game.player(PlayerSlot::Player2).name(), "Grace");
    Ok(())
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_error() {
    let err = MatchConfig::from_toml_str("player1_name = ").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_empty_file_uses_defaults() -> anyhow::Result<()> {
    let file = tempfile::NamedTempFile::new()?;
    let config = MatchConfig::from_file(file.path())?;
    assert_eq!(config, MatchConfig::default());
    Ok(())
}
