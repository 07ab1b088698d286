//! # CyberBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `cyberbot chat` (also the default when no
//! subcommand is given): the interactive console session around a
//! [`DialogueEngine`].
//!
//! ## Architecture
//!
//! The session flow follows these steps:
//! 1. Load configuration and apply command-line overrides
//! 2. Show the banner and greeting box (unless disabled)
//! 3. Ask for the user's name, re-prompting on blank input, unless one is configured
//! 4. Show the personalized welcome panel and usage hints
//! 5. Loop: prompt, read a line, `process_turn`, print the reply, until the
//!    engine signals termination or input ends
//!
//! I/O is generic over `BufRead`/`Write`, so the whole session can be driven
//! from memory in tests.
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session
//! cyberbot
//!
//! # Scripted session without animation or colors
//! printf 'Alice\npassword\nexit\n' | cyberbot chat --no-typing --no-color
//! ```
//!
use anyhow::{anyhow, Context};
use clap::Args;
use colored::Color;
use cyberbot::common::ui::{banner, Presenter};
use cyberbot::core::config::{self, Config};
use cyberbot::core::error::{CyberbotError, Result};
use cyberbot::dialogue::{DialogueEngine, RandomSource};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
///
/// Command-line overrides for the interactive session. Each flag takes
/// precedence over the matching configuration value.
#[derive(Args, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Your name. Skips the name prompt.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Seed for response selection, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print replies at once instead of character by character.
    #[arg(long)]
    pub no_typing: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Skip the ASCII banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// Effective settings for one session after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub user_name: Option<String>,
    pub bot_name: String,
    pub banner: bool,
    pub seed: Option<u64>,
    pub presenter: Presenter,
}

impl SessionSettings {
    pub fn resolve(config: &Config, args: &ChatArgs) -> Result<Self> {
        let user_name = match &args.name {
            Some(name) if name.trim().is_empty() => {
                return Err(anyhow!(CyberbotError::Config(
                    "--name cannot be blank.".to_string()
                )));
            }
            Some(name) => Some(name.trim().to_string()),
            None => config.persona.user_name.as_ref().map(|n| n.trim().to_string()),
        };
        let typing_delay = if args.no_typing {
            Duration::ZERO
        } else {
            Duration::from_millis(config.presentation.typing_delay_ms)
        };
        let color = config.presentation.color && !args.no_color;
        Ok(Self {
            user_name,
            bot_name: config.persona.bot_name.clone(),
            banner: config.presentation.banner && !args.no_banner,
            seed: args.seed,
            presenter: Presenter::new(color, typing_delay),
        })
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Entry point for `cyberbot chat`. Loads configuration (from `config_path`
/// when given), merges the flags and runs the session on stdin/stdout.
pub fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let cfg = config::load_config(config_path).context("Failed to load CyberBot configuration")?;
    let settings = SessionSettings::resolve(&cfg, &args)?;
    if !settings.presenter.color_enabled() {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &settings)
}

/// Runs one full conversation over `input`/`output`.
pub fn run_session<B: BufRead, W: Write>(
    input: &mut B,
    output: &mut W,
    settings: &SessionSettings,
) -> Result<()> {
    let presenter = settings.presenter;

    if settings.banner {
        presenter.print(output, banner::LOGO, Some(Color::Cyan))?;
        presenter.print(output, banner::GREETING_BOX, Some(Color::Yellow))?;
    }

    let user_name = match &settings.user_name {
        Some(name) => name.clone(),
        None => match prompt_user_name(input, output, &presenter)? {
            Some(name) => name,
            None => {
                debug!("Input ended before a name was entered");
                return Ok(());
            }
        },
    };
    info!("Starting conversation");

    let panel = banner::welcome_panel(&user_name).context("Failed to render welcome panel")?;
    presenter.print(output, "\n", None)?;
    presenter.print(output, &panel, Some(Color::Yellow))?;
    presenter.type_text(output, banner::USAGE_HINTS, Some(Color::Magenta))?;

    match settings.seed {
        Some(seed) => {
            debug!("Using seeded response selection (seed {})", seed);
            converse(input, output, settings, DialogueEngine::seeded(&user_name, seed))
        }
        None => converse(input, output, settings, DialogueEngine::<StdRng>::new(&user_name)),
    }
}

/// The prompt/reply loop.
fn converse<B: BufRead, W: Write, R: RandomSource>(
    input: &mut B,
    output: &mut W,
    settings: &SessionSettings,
    mut engine: DialogueEngine<R>,
) -> Result<()> {
    let presenter = settings.presenter;
    let user_prompt = format!("{}> ", engine.user_name());
    let bot_label = format!("{}> ", settings.bot_name);

    loop {
        presenter.print(output, &user_prompt, Some(Color::Green))?;
        let Some(line) = read_line(input)? else {
            debug!("End of input; ending conversation");
            presenter.print(output, "\n", None)?;
            return Ok(());
        };

        let outcome = engine.process_turn(&line);
        if line.trim().is_empty() {
            presenter.type_text(output, &format!("{}\n", outcome.reply), Some(Color::Red))?;
            continue;
        }

        presenter.print(output, &bot_label, Some(Color::Cyan))?;
        presenter.type_text(output, &format!("{}\n\n", outcome.reply), None)?;

        if outcome.should_terminate {
            info!(
                "Conversation ended after discussing {} topic(s)",
                engine.memory().interest_topics().len()
            );
            return Ok(());
        }
    }
}

fn prompt_user_name<B: BufRead, W: Write>(
    input: &mut B,
    output: &mut W,
    presenter: &Presenter,
) -> Result<Option<String>> {
    presenter.type_text(output, "What's your name? ", Some(Color::Green))?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let name = line.trim();
        if !name.is_empty() {
            return Ok(Some(name.to_string()));
        }
        presenter.type_text(output, "Please enter a valid name: ", Some(Color::Red))?;
    }
}

/// Reads one line without its line terminator. `None` at end of input.
fn read_line<B: BufRead>(input: &mut B) -> Result<Option<String>> {
    let mut buf = String::new();
    let bytes = input
        .read_line(&mut buf)
        .map_err(|e| anyhow!(CyberbotError::Input(e.to_string())))?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberbot::core::config::{PersonaConfig, PresentationConfig};

    fn settings(user_name: Option<&str>) -> SessionSettings {
        SessionSettings {
            user_name: user_name.map(str::to_string),
            bot_name: "CyberBot".to_string(),
            banner: false,
            seed: Some(1),
            presenter: Presenter::plain(),
        }
    }

    fn run(script: &str, settings: &SessionSettings) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run_session(&mut input, &mut output, settings).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_prompts_for_name_until_valid() {
        let out = run("\n   \nAlice\nbye\n", &settings(None));
        assert!(out.contains("What's your name? "));
        assert_eq!(out.matches("Please enter a valid name: ").count(), 2);
        assert!(out.contains("Welcome, Alice"));
        assert!(out.contains("CyberBot> Goodbye, Alice! Stay secure out there!"));
    }

    #[test]
    fn test_configured_name_skips_prompt() {
        let out = run("exit\n", &settings(Some("Bob")));
        assert!(!out.contains("What's your name?"));
        assert!(out.contains("Bob> "));
        assert!(out.contains("Goodbye, Bob!"));
    }

    #[test]
    fn test_session_stops_reading_after_exit() {
        let out = run("quit\npassword\n", &settings(Some("Bob")));
        assert_eq!(out.matches("Bob> ").count(), 1);
    }

    #[test]
    fn test_blank_turn_prints_clarification_without_label() {
        let out = run("   \nbye\n", &settings(Some("Bob")));
        assert!(out.contains("Bob> I didn't quite understand that. Could you rephrase?\n"));
    }

    #[test]
    fn test_recall_in_session() {
        let out = run(
            "password\nscam\nwhat did we discuss?\nbye\n",
            &settings(Some("Bob")),
        );
        assert!(out.contains("We've discussed password, scam."));
    }

    #[test]
    fn test_end_of_input_ends_quietly() {
        let out = run("privacy\n", &settings(Some("Bob")));
        assert!(!out.contains("Goodbye"));
        let out = run("", &settings(None));
        assert!(out.contains("What's your name? "));
        assert!(!out.contains("Welcome,"));
    }

    #[test]
    fn test_banner_is_optional() {
        let mut with_banner = settings(Some("Bob"));
        with_banner.banner = true;
        let out = run("bye\n", &with_banner);
        assert!(out.contains("Awareness Bot!"));

        let out = run("bye\n", &settings(Some("Bob")));
        assert!(!out.contains("Awareness Bot!"));
    }

    #[test]
    fn test_custom_bot_name_labels_replies() {
        let mut custom = settings(Some("Bob"));
        custom.bot_name = "Sentinel".to_string();
        let out = run("bye\n", &custom);
        assert!(out.contains("Sentinel> Goodbye, Bob!"));
    }

    #[test]
    fn test_windows_line_endings_are_stripped() {
        let out = run("Alice\r\nexit\r\n", &settings(None));
        assert!(out.contains("Goodbye, Alice!"));
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let cfg = Config {
            persona: PersonaConfig {
                bot_name: "Sentinel".into(),
                user_name: Some("Alice".into()),
            },
            presentation: PresentationConfig {
                typing_delay_ms: 40,
                color: true,
                banner: true,
            },
        };
        let args = ChatArgs {
            name: Some(" Bob ".into()),
            seed: Some(3),
            no_typing: true,
            no_color: true,
            no_banner: true,
        };
        let resolved = SessionSettings::resolve(&cfg, &args).unwrap();
        assert_eq!(resolved.user_name.as_deref(), Some("Bob"));
        assert_eq!(resolved.bot_name, "Sentinel");
        assert!(!resolved.banner);
        assert_eq!(resolved.seed, Some(3));
        assert_eq!(resolved.presenter, Presenter::plain());
    }

    #[test]
    fn test_resolve_uses_config_without_flags() {
        let cfg = Config {
            persona: PersonaConfig {
                bot_name: "CyberBot".into(),
                user_name: Some("Alice".into()),
            },
            ..Default::default()
        };
        let resolved = SessionSettings::resolve(&cfg, &ChatArgs::default()).unwrap();
        assert_eq!(resolved.user_name.as_deref(), Some("Alice"));
        assert!(resolved.banner);
        assert_eq!(resolved.presenter.typing_delay(), Duration::from_millis(20));
        assert!(resolved.presenter.color_enabled());
    }

    #[test]
    fn test_resolve_rejects_blank_name_flag() {
        let args = ChatArgs {
            name: Some("  ".into()),
            ..Default::default()
        };
        let result = SessionSettings::resolve(&Config::default(), &args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--name cannot be blank"));
    }
}
