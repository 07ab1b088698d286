//! # CyberBot Response Pool
//!
//! File: cli/src/dialogue/responses.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Static reply content and uniform random selection over it.
//!
//! - Every [`Topic`] owns four advice messages.
//! - `Worried`, `Curious` and `Frustrated` each own three empathy prefixes.
//!   `Neutral` and `Positive` have no prefix pool.
//!
//! The tables are built once by [`ResponsePool::seeded`] and never mutated
//! afterwards, so the pool can be shared freely by the router and the engine.
//!
//! ## Randomness
//!
//! Selection goes through the [`RandomSource`] trait rather than a global
//! generator. Every `rand::Rng` is a `RandomSource`, so production code passes
//! a `StdRng` (seeded or from entropy), while tests can script exact picks with
//! [`FixedSequence`].
//!
use crate::dialogue::sentiment::Sentiment;
use crate::dialogue::topic::Topic;
use std::collections::{BTreeMap, VecDeque};
use tracing::trace;

/// Source of uniformly distributed indices for response selection.
pub trait RandomSource {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// A scripted [`RandomSource`] that replays the given indices in order and
/// then keeps returning `0`. Indices past the end of a pool are clamped.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    picks: VecDeque<usize>,
}

impl FixedSequence {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for FixedSequence {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}

const PASSWORD_RESPONSES: &[&str] = &[
    "Use a combination of uppercase, lowercase, numbers, and symbols in your passwords.",
    "Never reuse passwords across different accounts.",
    "Consider using a password manager to generate and store strong passwords.",
    "Make your passwords at least 12 characters long for better security.",
];

const SCAM_RESPONSES: &[&str] = &[
    "Be wary of offers that seem too good to be true.",
    "Never send money or personal information to unverified sources.",
    "Check the sender's email address carefully for signs of spoofing.",
    "When in doubt, verify requests through official channels.",
];

const PRIVACY_RESPONSES: &[&str] = &[
    "Regularly review and update your privacy settings on social media.",
    "Be cautious about what personal information you share online.",
    "Use encryption tools when handling sensitive data.",
    "Consider using privacy-focused browsers and search engines.",
];

const PHISHING_RESPONSES: &[&str] = &[
    "Always verify the sender's email address before clicking links.",
    "Be suspicious of urgent requests for personal information.",
    "Look for spelling and grammar errors in suspicious emails.",
    "Hover over links to preview URLs before clicking them.",
];

const WORRIED_PREFIXES: &[&str] = &[
    "I understand your concern. Let me help you feel more secure.",
    "It's natural to feel worried. I'll guide you through some safety measures.",
    "Your concerns are valid. Let's work on addressing them together.",
];

const CURIOUS_PREFIXES: &[&str] = &[
    "That's a great question! I'm excited to help you learn more.",
    "Your curiosity will help you stay safer online. Let me explain.",
    "I'm glad you're interested in learning more about this topic!",
];

const FRUSTRATED_PREFIXES: &[&str] = &[
    "I can hear your frustration. Let's break this down into simpler steps.",
    "Don't worry, we'll figure this out together.",
    "It can be challenging, but I'm here to help you understand.",
];

/// Immutable topic and sentiment content with random selection.
#[derive(Debug, Clone)]
pub struct ResponsePool {
    topic_responses: BTreeMap<Topic, &'static [&'static str]>,
    sentiment_prefixes: BTreeMap<Sentiment, &'static [&'static str]>,
}

impl ResponsePool {
    /// Builds the pool with the built-in cybersecurity content.
    pub fn seeded() -> Self {
        let topic_responses = BTreeMap::from([
            (Topic::Password, PASSWORD_RESPONSES),
            (Topic::Scam, SCAM_RESPONSES),
            (Topic::Privacy, PRIVACY_RESPONSES),
            (Topic::Phishing, PHISHING_RESPONSES),
        ]);
        let sentiment_prefixes = BTreeMap::from([
            (Sentiment::Worried, WORRIED_PREFIXES),
            (Sentiment::Curious, CURIOUS_PREFIXES),
            (Sentiment::Frustrated, FRUSTRATED_PREFIXES),
        ]);
        Self {
            topic_responses,
            sentiment_prefixes,
        }
    }

    /// All candidate responses for `topic`.
    pub fn responses_for(&self, topic: Topic) -> &'static [&'static str] {
        self.topic_responses.get(&topic).copied().unwrap_or_default()
    }

    /// All candidate empathy prefixes for `sentiment`; empty when it has none.
    pub fn prefixes_for(&self, sentiment: Sentiment) -> &'static [&'static str] {
        self.sentiment_prefixes
            .get(&sentiment)
            .copied()
            .unwrap_or_default()
    }

    /// Picks one of the topic's responses uniformly at random.
    pub fn pick_topic_response<R: RandomSource + ?Sized>(
        &self,
        topic: Topic,
        rng: &mut R,
    ) -> &'static str {
        // Every seeded topic has a non-empty pool.
        pick(self.responses_for(topic), rng).unwrap_or_default()
    }

    /// Picks an empathy prefix for `sentiment`, or `None` when the sentiment
    /// has no prefix pool (`Neutral`, `Positive`).
    pub fn pick_sentiment_prefix<R: RandomSource + ?Sized>(
        &self,
        sentiment: Sentiment,
        rng: &mut R,
    ) -> Option<&'static str> {
        pick(self.prefixes_for(sentiment), rng)
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self::seeded()
    }
}

fn pick<R: RandomSource + ?Sized>(
    pool: &'static [&'static str],
    rng: &mut R,
) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.pick_index(pool.len()).min(pool.len() - 1);
    trace!("Picked candidate {} of {}", index, pool.len());
    pool.get(index).copied()
}
