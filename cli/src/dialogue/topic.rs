//! # CyberBot Topics
//!
//! File: cli/src/dialogue/topic.rs
//! Author: Christi Mahu
//!
//! The closed set of cybersecurity subjects the bot can discuss.
//!
use std::fmt;

/// A cybersecurity subject area with its own response pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Password,
    Scam,
    Privacy,
    Phishing,
}

impl Topic {
    /// All topics, in routing order.
    pub const ALL: [Topic; 4] = [Topic::Password, Topic::Scam, Topic::Privacy, Topic::Phishing];

    /// Stable lowercase identifier. Also the word shown in recall replies.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Password => "password",
            Topic::Scam => "scam",
            Topic::Privacy => "privacy",
            Topic::Phishing => "phishing",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
