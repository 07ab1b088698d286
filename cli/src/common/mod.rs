//! # CyberBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the shell commands, kept apart from the dialogue
//! core (`dialogue::`) and the infrastructure (`core::`).
//!
//! - **`ui`**: Terminal presentation (colors, typing effect, startup screens).
//!

/// Utilities for terminal user interface elements (colors, typing effect, banners).
pub mod ui;
