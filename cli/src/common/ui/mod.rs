//! # CyberBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The presentation adapter around the dialogue core: colors, the typing
//! effect and the startup screens. Nothing here influences conversation
//! state; it only decides how text reaches the terminal.
//!
//! ## Architecture
//!
//! - [`Presenter`]: colors and character-by-character output for any `Write`
//! - `banner`: ASCII logo, greeting box, welcome panel and usage hints
//!
use colored::{Color, Colorize};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub mod banner;

/// Renders text to the console according to the presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presenter {
    color: bool,
    typing_delay: Duration,
}

impl Presenter {
    pub fn new(color: bool, typing_delay: Duration) -> Self {
        Self {
            color,
            typing_delay,
        }
    }

    /// A presenter with no colors and no typing delay.
    pub fn plain() -> Self {
        Self::new(false, Duration::ZERO)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    /// Wraps `text` in ANSI color codes when colors are enabled.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Writes `text` at once, optionally colored, and flushes.
    pub fn print<W: Write>(&self, out: &mut W, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(c) => write!(out, "{}", self.paint(text, c))?,
            None => write!(out, "{}", text)?,
        }
        out.flush()
    }

    /// Writes `text` one character at a time with the typing delay.
    ///
    /// With a zero delay this is the same as [`Presenter::print`].
    pub fn type_text<W: Write>(
        &self,
        out: &mut W,
        text: &str,
        color: Option<Color>,
    ) -> io::Result<()> {
        if self.typing_delay.is_zero() {
            return self.print(out, text, color);
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let piece: &str = ch.encode_utf8(&mut buf);
            match color {
                Some(c) if self.color => write!(out, "{}", piece.color(c))?,
                _ => out.write_all(piece.as_bytes())?,
            }
            out.flush()?;
            thread::sleep(self.typing_delay);
        }
        Ok(())
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(true, Duration::from_millis(20))
    }
}
