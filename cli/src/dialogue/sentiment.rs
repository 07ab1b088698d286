//! # CyberBot Sentiment Classifier
//!
//! File: cli/src/dialogue/sentiment.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Tags each turn with a coarse emotional label. Classification is plain
//! case-insensitive substring matching against four static keyword groups,
//! checked in a fixed priority order:
//!
//! 1. `Worried`: "worried", "scared", "concerned"
//! 2. `Curious`: "curious", "interested", "tell me"
//! 3. `Frustrated`: "frustrated", "confused", "difficult"
//! 4. `Positive`: "thanks", "great", "helpful"
//!
//! The first group with any hit wins. Text matching no group is `Neutral`.
//! The classifier is a pure function of the text; it never looks at session state.
//!
use std::fmt;

/// Coarse emotional classification of one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Sentiment {
    #[default]
    Neutral,
    Worried,
    Curious,
    Frustrated,
    Positive,
}

impl Sentiment {
    /// Lowercase label, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Neutral => "neutral",
            Sentiment::Worried => "worried",
            Sentiment::Curious => "curious",
            Sentiment::Frustrated => "frustrated",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups in priority order. Order is significant.
const KEYWORD_GROUPS: &[(Sentiment, &[&str])] = &[
    (Sentiment::Worried, &["worried", "scared", "concerned"]),
    (Sentiment::Curious, &["curious", "interested", "tell me"]),
    (Sentiment::Frustrated, &["frustrated", "confused", "difficult"]),
    (Sentiment::Positive, &["thanks", "great", "helpful"]),
];

/// Stateless keyword-based classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentClassifier;

impl SentimentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies `text` into one [`Sentiment`].
    pub fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|(sentiment, _)| *sentiment)
            .unwrap_or_default()
    }
}
