//! # CyberBot Dialogue Integration Tests
//!
//! File: cli/tests/dialogue.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Multi-turn conversations driven through the public library API only,
//! treating `DialogueEngine` as a black box.
//!

use cyberbot::dialogue::{
    DialogueEngine, EngineState, FixedSequence, ResponsePool, Sentiment, Topic,
};

fn scripted(picks: &[usize]) -> DialogueEngine<FixedSequence> {
    DialogueEngine::with_rng("Alice", FixedSequence::new(picks.iter().copied()))
}

#[test]
fn test_worried_scam_turn() {
    let pool = ResponsePool::seeded();
    let mut engine = DialogueEngine::seeded("Alice", 2024);
    let outcome = engine.process_turn("I'm worried about scam emails");

    let (prefix, response) = outcome
        .reply
        .split_once('\n')
        .expect("worried reply should have a prefix line");
    assert!(pool.prefixes_for(Sentiment::Worried).contains(&prefix));
    assert!(pool.responses_for(Topic::Scam).contains(&response));
    assert_eq!(engine.memory().last_sentiment(), Sentiment::Worried);
    assert_eq!(engine.memory().interest_topics(), &[Topic::Scam]);
    assert!(!outcome.should_terminate);
}

#[test]
fn test_positive_turn_has_no_prefix() {
    let pool = ResponsePool::seeded();
    let mut engine = scripted(&[1]);
    let outcome = engine.process_turn("thanks, phishing advice was great");
    assert_eq!(outcome.reply, pool.responses_for(Topic::Phishing)[1]);
    assert_eq!(engine.memory().last_sentiment(), Sentiment::Positive);
}

#[test]
fn test_curious_prefix_is_exact_with_scripted_picks() {
    let pool = ResponsePool::seeded();
    let mut engine = scripted(&[0, 2]);
    let outcome = engine.process_turn("Tell me about privacy");
    assert_eq!(
        outcome.reply,
        format!(
            "{}\n{}",
            pool.prefixes_for(Sentiment::Curious)[2],
            pool.responses_for(Topic::Privacy)[0]
        )
    );
}

#[test]
fn test_full_conversation_flow() {
    let mut engine = scripted(&[]);

    assert!(engine.process_turn("what did we discuss").reply.starts_with("I'm not sure"));
    engine.process_turn("my password is weak");
    engine.process_turn("is this a scam?");
    engine.process_turn("PASSWORD again");
    engine.process_turn("   ");

    let recall = engine.process_turn("What topics did we cover?");
    assert_eq!(
        recall.reply,
        "We've discussed password, scam. Would you like to know more about any of these topics?"
    );
    assert_eq!(engine.memory().interest_topics().len(), 2);

    let farewell = engine.process_turn("Quit");
    assert!(farewell.should_terminate);
    assert_eq!(farewell.reply, "Goodbye, Alice! Stay secure out there!");
    assert_eq!(engine.state(), EngineState::Terminated);
}

#[test]
fn test_repeat_topic_refreshes_access_time_only() {
    let mut engine = scripted(&[]);
    engine.process_turn("scam");
    let first = engine.memory().last_accessed(Topic::Scam).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    engine.process_turn("privacy");
    engine.process_turn("another scam");
    let second = engine.memory().last_accessed(Topic::Scam).unwrap();

    assert_eq!(engine.memory().interest_topics(), &[Topic::Scam, Topic::Privacy]);
    assert!(second > first);
}

#[test]
fn test_separate_engines_do_not_share_memory() {
    let mut a = scripted(&[]);
    let mut b = scripted(&[]);
    a.process_turn("password");
    b.process_turn("phishing");
    assert_eq!(a.memory().interest_topics(), &[Topic::Password]);
    assert_eq!(b.memory().interest_topics(), &[Topic::Phishing]);
}

#[test]
fn test_non_ascii_and_long_input() {
    let mut engine = scripted(&[]);
    let outcome = engine.process_turn("¿Qué es el phishing? 🎣");
    assert!(engine.memory().has_discussed(Topic::Phishing));
    assert!(!outcome.should_terminate);

    let long = "a".repeat(100_000) + " privacy";
    engine.process_turn(&long);
    assert!(engine.memory().has_discussed(Topic::Privacy));
}
