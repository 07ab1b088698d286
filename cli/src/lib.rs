//! # CyberBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library target of the `cyberbot` crate. It exposes the dialogue core so
//! hosts other than the bundled console shell (and the integration tests)
//! can drive conversations directly:
//!
//! ```rust
//! use cyberbot::dialogue::DialogueEngine;
//!
//! let mut engine = DialogueEngine::seeded("Alice", 7);
//! let outcome = engine.process_turn("I'm worried about phishing");
//! assert!(!outcome.reply.is_empty());
//! ```
//!
//! ## Modules
//!
//! - `dialogue`: sentiment, topic routing, responses, session memory, engine
//! - `core`: configuration, errors, templating
//! - `common`: console presentation helpers
//!
pub mod common;
pub mod core;
pub mod dialogue;
