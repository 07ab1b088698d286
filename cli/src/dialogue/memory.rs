//! # CyberBot Session Memory
//!
//! File: cli/src/dialogue/memory.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Per-conversation mutable state. One `SessionMemory` lives inside each
//! `DialogueEngine` and is dropped with it; nothing is persisted.
//!
//! It records:
//! - the topics discussed so far, in first-mention order and without duplicates,
//! - when each topic was last mentioned,
//! - the sentiment of the most recent turn.
//!
//! A topic is present in `interest_topics` exactly when its handler has fired
//! at least once this session, and every timestamp key is one of those topics.
//!
use crate::dialogue::sentiment::Sentiment;
use crate::dialogue::topic::Topic;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    interest_topics: Vec<Topic>,
    topic_access_times: HashMap<Topic, DateTime<Utc>>,
    last_sentiment: Sentiment,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mention of `topic` at the current time.
    pub fn add_interest(&mut self, topic: Topic) {
        self.add_interest_at(topic, Utc::now());
    }

    /// Records a mention of `topic` at `at`.
    ///
    /// The topic is appended to the discussed list only on its first mention.
    /// The access time is overwritten on every mention.
    pub fn add_interest_at(&mut self, topic: Topic, at: DateTime<Utc>) {
        if !self.interest_topics.contains(&topic) {
            debug!("New interest topic recorded: {}", topic);
            self.interest_topics.push(topic);
        }
        self.topic_access_times.insert(topic, at);
    }

    /// Topics discussed so far, in first-mention order.
    pub fn interest_topics(&self) -> &[Topic] {
        &self.interest_topics
    }

    pub fn has_discussed(&self, topic: Topic) -> bool {
        self.interest_topics.contains(&topic)
    }

    /// Time of the most recent mention of `topic`, if it was ever mentioned.
    pub fn last_accessed(&self, topic: Topic) -> Option<DateTime<Utc>> {
        self.topic_access_times.get(&topic).copied()
    }

    pub fn last_sentiment(&self) -> Sentiment {
        self.last_sentiment
    }

    pub fn set_last_sentiment(&mut self, sentiment: Sentiment) {
        self.last_sentiment = sentiment;
    }

    /// True until the first topic handler fires.
    pub fn is_empty(&self) -> bool {
        self.interest_topics.is_empty()
    }

    /// Discussed topics joined by `", "`, e.g. `"password, scam"`.
    pub fn topics_summary(&self) -> String {
        self.interest_topics
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_new_memory_is_empty_and_neutral() {
        let memory = SessionMemory::new();
        assert!(memory.is_empty());
        assert!(memory.interest_topics().is_empty());
        assert_eq!(memory.last_sentiment(), Sentiment::Neutral);
        assert_eq!(memory.topics_summary(), "");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut memory = SessionMemory::new();
        memory.add_interest_at(Topic::Privacy, at(0));
        memory.add_interest_at(Topic::Password, at(1));
        memory.add_interest_at(Topic::Scam, at(2));
        assert_eq!(
            memory.interest_topics(),
            &[Topic::Privacy, Topic::Password, Topic::Scam]
        );
        assert_eq!(memory.topics_summary(), "privacy, password, scam");
    }

    #[test]
    fn test_repeat_mention_updates_time_without_duplicating() {
        let mut memory = SessionMemory::new();
        memory.add_interest_at(Topic::Scam, at(0));
        memory.add_interest_at(Topic::Phishing, at(5));
        memory.add_interest_at(Topic::Scam, at(10));

        assert_eq!(memory.interest_topics(), &[Topic::Scam, Topic::Phishing]);
        assert_eq!(memory.last_accessed(Topic::Scam), Some(at(10)));
        assert_eq!(memory.last_accessed(Topic::Phishing), Some(at(5)));
    }

    #[test]
    fn test_access_time_keys_follow_interest_topics() {
        let mut memory = SessionMemory::new();
        assert_eq!(memory.last_accessed(Topic::Password), None);
        memory.add_interest(Topic::Password);
        assert!(memory.has_discussed(Topic::Password));
        assert!(!memory.has_discussed(Topic::Privacy));
        let recorded = memory.last_accessed(Topic::Password).unwrap();
        assert!(Utc::now() - recorded < Duration::seconds(60));
    }

    #[test]
    fn test_sentiment_slot_is_overwritten() {
        let mut memory = SessionMemory::new();
        memory.set_last_sentiment(Sentiment::Worried);
        memory.set_last_sentiment(Sentiment::Positive);
        assert_eq!(memory.last_sentiment(), Sentiment::Positive);
    }
}
