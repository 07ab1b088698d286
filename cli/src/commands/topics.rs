//! # CyberBot Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `cyberbot topics`, a non-interactive listing of the subjects the
//! bot can discuss, in the order keywords are matched.
//!
//! Example output:
//!
//! ```text
//! Supported topics (first matching keyword wins):
//!
//! Keyword    | Topic      | Responses
//! -----------+------------+----------
//! password   | password   | 4
//! scam       | scam       | 4
//! privacy    | privacy    | 4
//! phishing   | phishing   | 4
//! ```
//!
use clap::Args;
use cyberbot::core::error::Result;
use cyberbot::dialogue::{ResponsePool, TopicRouter};
use std::io::{self, Write};
use tracing::info;

/// # Topics Arguments (`TopicsArgs`)
///
/// The command takes no options; the struct keeps the subcommand layout uniform.
#[derive(Args, Debug, Default)]
pub struct TopicsArgs {}

pub fn handle_topics(_args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_topic_table(&mut out, &TopicRouter::new(), &ResponsePool::seeded())?;
    Ok(())
}

fn write_topic_table<W: Write>(
    out: &mut W,
    router: &TopicRouter,
    pool: &ResponsePool,
) -> io::Result<()> {
    writeln!(out, "Supported topics (first matching keyword wins):\n")?;
    writeln!(out, "{:<10} | {:<10} | Responses", "Keyword", "Topic")?;
    writeln!(out, "{:-<11}+{:-<12}+{:-<10}", "", "", "")?;
    for (keyword, topic) in router.routes() {
        writeln!(
            out,
            "{:<10} | {:<10} | {}",
            keyword,
            topic.as_str(),
            pool.responses_for(*topic).len()
        )?;
    }
    Ok(())
}
