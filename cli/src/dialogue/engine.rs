//! # CyberBot Dialogue Engine
//!
//! File: cli/src/dialogue/engine.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Orchestrates one conversational turn. The engine owns the session's
//! [`SessionMemory`] and is the only thing that mutates it.
//!
//! ## Turn Pipeline
//!
//! `process_turn(text)` runs these steps, stopping at the first that replies:
//!
//! 1. Blank input: clarification reply. State is not touched.
//! 2. Exit literal (`exit`, `quit`, `bye`, trimmed, any case): farewell reply,
//!    `should_terminate = true`, engine moves to `Terminated`.
//! 3. Sentiment is classified and stored as the session's last sentiment.
//! 4. Recall query ("what did we discuss" / "what topics"): lists discussed
//!    topics. With nothing discussed yet this step is skipped.
//! 5. Topic routing through [`TopicRouter`].
//! 6. Fallback reply naming the supported topics.
//!
//! Every branch is total. No input makes the engine fail.
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::dialogue::{DialogueEngine, FixedSequence};
//!
//! let mut engine = DialogueEngine::with_rng("Alice", FixedSequence::default());
//! let outcome = engine.process_turn("tell me about passwords");
//! assert!(!outcome.should_terminate);
//!
//! let outcome = engine.process_turn("what did we discuss?");
//! assert!(outcome.reply.contains("password"));
//!
//! let outcome = engine.process_turn("bye");
//! assert!(outcome.should_terminate);
//! ```
//!
use crate::dialogue::memory::SessionMemory;
use crate::dialogue::responses::{RandomSource, ResponsePool};
use crate::dialogue::router::TopicRouter;
use crate::dialogue::sentiment::SentimentClassifier;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// Reply for empty or whitespace-only input.
pub const CLARIFICATION_REPLY: &str = "I didn't quite understand that. Could you rephrase?";

/// Reply when no recall query or topic keyword matched.
pub const FALLBACK_REPLY: &str = "I'm not sure about that. You can ask me about passwords, \
    scams, privacy, or phishing. Or ask what topics we've discussed!";

const EXIT_PHRASES: &[&str] = &["exit", "quit", "bye"];
const RECALL_PHRASES: &[&str] = &["what did we discuss", "what topics"];

/// Lifecycle of one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    /// Terminal. The host should stop sending turns.
    Terminated,
}

/// The result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Text to show the user. May contain newlines.
    pub reply: String,
    /// True once the user has asked to leave.
    pub should_terminate: bool,
}

impl TurnOutcome {
    fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            should_terminate: false,
        }
    }

    fn farewell(reply: String) -> Self {
        Self {
            reply,
            should_terminate: true,
        }
    }
}

/// One conversation with one user.
///
/// Generic over its [`RandomSource`] so tests can fix the response picks.
/// One engine per conversation; engines share no mutable state.
#[derive(Debug)]
pub struct DialogueEngine<R = StdRng> {
    user_name: String,
    classifier: SentimentClassifier,
    pool: ResponsePool,
    router: TopicRouter,
    memory: SessionMemory,
    rng: R,
    state: EngineState,
}

impl DialogueEngine<StdRng> {
    /// Creates an engine whose picks come from OS entropy.
    pub fn new(user_name: &str) -> Self {
        Self::with_rng(user_name, StdRng::from_entropy())
    }

    /// Creates an engine with a reproducible pick sequence.
    pub fn seeded(user_name: &str, seed: u64) -> Self {
        Self::with_rng(user_name, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> DialogueEngine<R> {
    pub fn with_rng(user_name: &str, rng: R) -> Self {
        Self {
            user_name: user_name.to_string(),
            classifier: SentimentClassifier::new(),
            pool: ResponsePool::seeded(),
            router: TopicRouter::new(),
            memory: SessionMemory::new(),
            rng,
            state: EngineState::Running,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Processes one line of user text into a reply.
    pub fn process_turn(&mut self, raw_text: &str) -> TurnOutcome {
        if self.state == EngineState::Terminated {
            debug!("Turn received after termination; repeating farewell");
            return TurnOutcome::farewell(self.farewell());
        }

        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            debug!("Blank turn; asking for clarification");
            return TurnOutcome::reply(CLARIFICATION_REPLY);
        }
        trace!("Processing turn: {:?}", trimmed);

        let lowered = trimmed.to_lowercase();
        if EXIT_PHRASES.contains(&lowered.as_str()) {
            debug!("Exit phrase received; terminating session");
            self.state = EngineState::Terminated;
            return TurnOutcome::farewell(self.farewell());
        }

        let sentiment = self.classifier.classify(trimmed);
        self.memory.set_last_sentiment(sentiment);
        debug!("Classified turn sentiment: {}", sentiment);

        if let Some(reply) = self.recall(&lowered) {
            return TurnOutcome::reply(reply);
        }

        if let Some(reply) =
            self.router
                .route(trimmed, sentiment, &mut self.memory, &self.pool, &mut self.rng)
        {
            return TurnOutcome::reply(reply);
        }

        debug!("No topic matched; using fallback reply");
        TurnOutcome::reply(FALLBACK_REPLY)
    }

    /// Recall reply, when `lowered` is a recall query and something was discussed.
    fn recall(&self, lowered: &str) -> Option<String> {
        if !RECALL_PHRASES.iter().any(|p| lowered.contains(p)) {
            return None;
        }
        if self.memory.is_empty() {
            debug!("Recall query with empty memory; falling through to routing");
            return None;
        }
        debug!(
            "Recall query; {} topic(s) discussed",
            self.memory.interest_topics().len()
        );
        Some(format!(
            "We've discussed {}. Would you like to know more about any of these topics?",
            self.memory.topics_summary()
        ))
    }

    fn farewell(&self) -> String {
        format!("Goodbye, {}! Stay secure out there!", self.user_name)
    }
}
