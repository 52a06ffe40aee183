// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use trex_adapters::{Fragment, Presenter, Style};

pub mod codes {
    /// Operators and headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Leaf letters: light grey
    pub const LITERAL: u8 = 250;
    /// Node ids and tree glyphs: darker grey
    pub const MUTED: u8 = 240;

    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Applies colors when enabled, passes text through otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colorize: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self::new(should_colorize())
    }

    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    fn paint(&self, start: &str, text: &str) -> String {
        if self.colorize {
            format!("{start}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(&fg256(codes::HEADER), text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(&fg256(codes::LITERAL), text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(&fg256(codes::MUTED), text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    /// Green for true, red for false.
    pub fn verdict(&self, value: bool) -> String {
        if value {
            self.green("TRUE")
        } else {
            self.red("FALSE")
        }
    }
}

/// Presents expansion fragments with item state colors.
///
/// Enabled items are green, disabled red, unknown yellow.
pub struct ColorPresenter {
    palette: Palette,
}

impl ColorPresenter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Presenter for ColorPresenter {
    fn present(&self, fragments: &[Fragment]) -> String {
        fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Text { text } => text.clone(),
                Fragment::Reference { text, style, .. } => match style {
                    Style::Enabled => self.palette.green(text),
                    Style::Disabled => self.palette.red(text),
                    Style::Unknown => self.palette.yellow(text),
                },
                Fragment::Error => self.palette.red(fragment.plain()),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
