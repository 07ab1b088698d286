//! # CyberBot Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrapper around the Tera templating engine used for the console
//! presentation (the personalized welcome panel). Templates are small inline
//! strings, so they are rendered one-off rather than loaded into a `Tera` instance.
//!
//! Autoescaping is off: output goes to a terminal, not HTML.
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::core::templating;
//! use std::collections::HashMap;
//!
//! let mut context = HashMap::new();
//! context.insert("user_name".to_string(), "Alice".to_string());
//! let text = templating::render_str("Welcome, {{ user_name }}!", &context).unwrap();
//! assert_eq!(text, "Welcome, Alice!");
//! ```
//!
use crate::core::error::{CyberbotError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;
use tracing::debug;

/// Renders `template` with the variables in `context_map`.
pub fn render_str(template: &str, context_map: &HashMap<String, String>) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(CyberbotError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;
    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(CyberbotError::Template { source: e }).context("Tera rendering failed")
    })?;
    debug!("Rendered template ({} bytes)", rendered.len());
    Ok(rendered)
}
