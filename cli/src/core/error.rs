//! # CyberBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the CyberBot shell and its
//! supporting infrastructure.
//!
//! The dialogue core (`crate::dialogue`) never produces errors: every input
//! string, including empty or unrecognized text, maps to a reply. Errors only
//! arise around it, while loading configuration, rendering presentation
//! templates, or talking to the console.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CyberbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if config.persona.bot_name.trim().is_empty() {
//!     return Err(anyhow!(CyberbotError::Config("bot_name cannot be blank".into())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CyberBot application.
#[derive(Error, Debug)]
pub enum CyberbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Console input error: {0}")]
    Input(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
