//! # CyberBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the shell commands:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Template rendering for console presentation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CyberbotError, Result}; // For error handling
//! use crate::core::templating; // For rendering the welcome panel
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
