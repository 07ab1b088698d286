//! # CyberBot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the binary-level integration tests. Every command built
//! here points `--config` at a temporary file so the host's own user or
//! project configuration never leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get CyberBot Command (`cyberbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `cyberbot` binary.
///
/// ## Panics
/// Panics if the `cyberbot` binary cannot be found via `Command::cargo_bin`.
pub fn cyberbot_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("cyberbot").expect("Failed to find cyberbot binary for testing");
    cmd.env_remove("CYBERBOT_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to a `config.toml` inside a fresh temporary directory.
///
/// The returned `TempDir` must be kept alive while the command runs.
pub fn temp_config(contents: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write temp config");
    (dir, path.to_string_lossy().into_owned())
}

/// A `chat` command with animation, colors and banner disabled, using an
/// empty configuration file.
pub fn quiet_chat() -> (TempDir, Command) {
    let (dir, config_path) = temp_config("");
    let mut cmd = cyberbot_cmd();
    cmd.args(["--config", &config_path, "chat", "--no-typing", "--no-color", "--no-banner"]);
    (dir, cmd)
}
