//! # CyberBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for CyberBot, handling loading,
//! merging, and validation of configuration data. Configuration only affects the
//! console shell (names, colors, typing speed); the dialogue rules themselves are
//! fixed data and cannot be changed from a file.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `CYBERBOT_CONFIG`). When given,
//!    no other file is consulted.
//! 2. Project-specific `.cyberbot.toml` in current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/cyberbot/config.toml`
//! 4. Default values defined in the code
//!
//! Command-line flags are applied on top of the result by the `chat` command.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [persona]
//! bot_name = "CyberBot"
//! user_name = "Alice"
//!
//! [presentation]
//! typing_delay_ms = 20
//! color = true
//! banner = true
//! ```
//!
//! Loading configuration:
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! println!("Bot label: {}", cfg.persona.bot_name);
//! ```
//!
use crate::core::error::{CyberbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Upper bound for the per-character typing delay.
pub const MAX_TYPING_DELAY_MS: u64 = 1000;

const PROJECT_CONFIG_FILENAME: &str = ".cyberbot.toml";

/// The effective configuration after all layers are applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub persona: PersonaConfig,
    pub presentation: PresentationConfig,
}

/// Names used in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    /// Label printed before each bot reply.
    pub bot_name: String,
    /// When set, the name prompt is skipped.
    pub user_name: Option<String>,
}

/// Console rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Delay between characters of a reply. `0` prints replies at once.
    pub typing_delay_ms: u64,
    /// Enables ANSI colors.
    pub color: bool,
    /// Shows the ASCII banner at startup.
    pub banner: bool,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            bot_name: "CyberBot".to_string(),
            user_name: None,
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 20,
            color: true,
            banner: true,
        }
    }
}

/// A single configuration file as written on disk.
///
/// Every key is optional so that a key explicitly set to its default value
/// still overrides a lower layer.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    persona: PersonaFile,
    #[serde(default)]
    presentation: PresentationFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PersonaFile {
    bot_name: Option<String>,
    user_name: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PresentationFile {
    typing_delay_ms: Option<u64>,
    color: Option<bool>,
    banner: Option<bool>,
}

impl ConfigFile {
    /// Keys set in `self` win; unset keys fall through to `lower`.
    fn over(self, lower: ConfigFile) -> ConfigFile {
        ConfigFile {
            persona: PersonaFile {
                bot_name: self.persona.bot_name.or(lower.persona.bot_name),
                user_name: self.persona.user_name.or(lower.persona.user_name),
            },
            presentation: PresentationFile {
                typing_delay_ms: self
                    .presentation
                    .typing_delay_ms
                    .or(lower.presentation.typing_delay_ms),
                color: self.presentation.color.or(lower.presentation.color),
                banner: self.presentation.banner.or(lower.presentation.banner),
            },
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let defaults = Config::default();
        Config {
            persona: PersonaConfig {
                bot_name: file.persona.bot_name.unwrap_or(defaults.persona.bot_name),
                user_name: file.persona.user_name,
            },
            presentation: PresentationConfig {
                typing_delay_ms: file
                    .presentation
                    .typing_delay_ms
                    .unwrap_or(defaults.presentation.typing_delay_ms),
                color: file.presentation.color.unwrap_or(defaults.presentation.color),
                banner: file.presentation.banner.unwrap_or(defaults.presentation.banner),
            },
        }
    }
}

/// Loads, merges and validates the configuration.
///
/// With `explicit_path`, only that file is read (after `~` expansion) and it
/// must exist. Otherwise the user and project files are merged over defaults.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let config = match explicit_path {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            merge_configs(Some(load_config_from_path(&expanded)?), None)
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config, project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "CyberBot", "cyberbot") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project keys win over user keys; keys neither file sets take the defaults.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    project
        .unwrap_or_default()
        .over(user.unwrap_or_default())
        .into()
}

pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.persona.bot_name.trim().is_empty() {
        return Err(anyhow!(CyberbotError::Config(
            "persona.bot_name cannot be blank.".to_string()
        )));
    }
    if let Some(user_name) = &config.persona.user_name {
        if user_name.trim().is_empty() {
            return Err(anyhow!(CyberbotError::Config(
                "persona.user_name cannot be blank when set.".to_string()
            )));
        }
    }
    if config.presentation.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(CyberbotError::Config(format!(
            "presentation.typing_delay_ms must be at most {} (got {}).",
            MAX_TYPING_DELAY_MS, config.presentation.typing_delay_ms
        ))));
    }
    Ok(())
}
