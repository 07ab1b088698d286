//! # CyberBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `cyberbot` binary.
//! Each command defines its own arguments structure and handler function.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation (the default)
//! - `topics`: Lists the supported topics and their routing keywords
//!

/// Interactive console session around the dialogue engine.
pub mod chat;
/// Non-interactive listing of the supported topics.
pub mod topics;
