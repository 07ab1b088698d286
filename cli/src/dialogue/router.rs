//! # CyberBot Topic Router
//!
//! File: cli/src/dialogue/router.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a turn to at most one topic by keyword containment and composes the
//! topic reply.
//!
//! Keywords are held as an explicit ordered list of `(keyword, topic)` pairs.
//! The list is scanned front to back and the first keyword found in the
//! lowercased text wins, so "tell me about password and scam" routes to
//! `password` only.
//!
//! On a match the router:
//! 1. records the topic in [`SessionMemory`] (one mutation per matched turn),
//! 2. picks a topic response from the [`ResponsePool`],
//! 3. picks an optional empathy prefix for the turn's sentiment,
//! 4. returns `prefix + "\n" + response`, or just `response` without a prefix.
//!
//! No-match turns leave memory untouched and return `None`.
//!
use crate::dialogue::memory::SessionMemory;
use crate::dialogue::responses::{RandomSource, ResponsePool};
use crate::dialogue::sentiment::Sentiment;
use crate::dialogue::topic::Topic;
use tracing::debug;

/// Routing table in match priority order.
const TOPIC_KEYWORDS: &[(&str, Topic)] = &[
    ("password", Topic::Password),
    ("scam", Topic::Scam),
    ("privacy", Topic::Privacy),
    ("phishing", Topic::Phishing),
];

#[derive(Debug, Clone)]
pub struct TopicRouter {
    routes: Vec<(&'static str, Topic)>,
}

impl TopicRouter {
    pub fn new() -> Self {
        Self {
            routes: TOPIC_KEYWORDS.to_vec(),
        }
    }

    /// The `(keyword, topic)` pairs in match priority order.
    pub fn routes(&self) -> &[(&'static str, Topic)] {
        &self.routes
    }

    /// Returns the first topic whose keyword occurs in `text`, ignoring case.
    pub fn match_topic(&self, text: &str) -> Option<Topic> {
        let lowered = text.to_lowercase();
        self.routes
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, topic)| *topic)
    }

    /// Routes one turn. See the module docs for the composition rules.
    pub fn route<R: RandomSource + ?Sized>(
        &self,
        text: &str,
        sentiment: Sentiment,
        memory: &mut SessionMemory,
        pool: &ResponsePool,
        rng: &mut R,
    ) -> Option<String> {
        let topic = self.match_topic(text)?;
        debug!("Routed turn to topic '{}' (sentiment: {})", topic, sentiment);

        memory.add_interest(topic);
        let response = pool.pick_topic_response(topic, rng);
        let reply = match pool.pick_sentiment_prefix(sentiment, rng) {
            Some(prefix) => format!("{}\n{}", prefix, response),
            None => response.to_string(),
        };
        Some(reply)
    }
}

impl Default for TopicRouter {
    fn default() -> Self {
        Self::new()
    }
}
