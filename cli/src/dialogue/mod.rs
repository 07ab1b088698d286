//! # CyberBot Dialogue Core
//!
//! File: cli/src/dialogue/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The rule-based conversation pipeline. Everything here is synchronous,
//! performs no I/O and never fails; the console shell in `commands::chat`
//! feeds it one line at a time and renders the replies.
//!
//! ## Architecture
//!
//! Components, leaf first:
//! - `sentiment`: keyword-based [`SentimentClassifier`]
//! - `topic`: the closed [`Topic`] set
//! - `responses`: static [`ResponsePool`] content and the [`RandomSource`] seam
//! - `memory`: per-session [`SessionMemory`]
//! - `router`: keyword-to-topic [`TopicRouter`]
//! - `engine`: the turn orchestrator [`DialogueEngine`]
//!
pub mod engine;
pub mod memory;
pub mod responses;
pub mod router;
pub mod sentiment;
pub mod topic;

pub use engine::{DialogueEngine, EngineState, TurnOutcome};
pub use memory::SessionMemory;
pub use responses::{FixedSequence, RandomSource, ResponsePool};
pub use router::TopicRouter;
pub use sentiment::{Sentiment, SentimentClassifier};
pub use topic::Topic;
