//! ANSI styling for console output
//!
//! Styling follows the `NO_COLOR` / `FORCE_COLOR` conventions and is
//! otherwise only applied when stdout is an interactive terminal.

use std::env;
use std::io::IsTerminal;

/// ANSI escape sequences used by the console output
pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const ITALIC: &'static str = "\x1b[3m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Where the decision to style output came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// `NO_COLOR` is set or `FORCE_COLOR=0`
    Disabled,
    /// `FORCE_COLOR` is set to anything but `0`
    Forced,
    /// Decided by the terminal
    Auto,
}

impl ColorMode {
    pub fn from_env() -> Self {
        let force = env::var("FORCE_COLOR").ok();
        if env::var_os("NO_COLOR").is_some() || force.as_deref() == Some("0") {
            ColorMode::Disabled
        } else if force.is_some() {
            ColorMode::Forced
        } else {
            ColorMode::Auto
        }
    }

    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Disabled => false,
            ColorMode::Forced => true,
            ColorMode::Auto => terminal_supports_color(),
        }
    }
}

fn terminal_supports_color() -> bool {
    // Test binaries never style output unless forced
    if cfg!(test) || env::var_os("RUST_TEST_TIME_UNIT").is_some() {
        return false;
    }
    if !std::io::stdout().is_terminal() {
        return false;
    }
    env::var("TERM").is_ok_and(|term| !term.is_empty() && term != "dumb")
}

/// Whether console output should carry ANSI styling
pub fn supports_formatting() -> bool {
    ColorMode::from_env().enabled()
}

fn style(text: &str, prefix: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{prefix}{color}{text}{}", Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Wrap `text` in `color` when styling is enabled
pub fn colorize(text: &str, color: &str) -> String {
    style(text, "", color)
}

/// Like [`colorize`], in bold
pub fn colorize_bold(text: &str, color: &str) -> String {
    style(text, Colors::BOLD, color)
}
