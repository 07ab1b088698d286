//! # CyberBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CyberBot console shell.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! The dialogue logic itself lives in the `cyberbot` library crate; this
//! binary only reads lines, renders replies and exits when told to.
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! cyberbot
//!
//! # Same, with debug logging and a fixed response sequence
//! cyberbot -vv chat --seed 42
//!
//! # List supported topics
//! cyberbot topics
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cyberbot",
    about = "CyberBot: cybersecurity awareness chatbot",
    long_about = "Ask about passwords, scams, privacy and phishing.\n\
                  Runs an interactive chat session when no subcommand is given.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user/project files.
    #[arg(long, global = true, env = "CYBERBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation (default).
    Chat(commands::chat::ChatArgs),
    /// List supported topics and their keywords.
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args, cli.config.as_deref()),
        Some(Commands::Topics(args)) => commands::topics::handle_topics(args),
        None => commands::chat::handle_chat(Default::default(), cli.config.as_deref()),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
