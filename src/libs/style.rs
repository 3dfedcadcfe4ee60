//! Terminal color styling.
//!
//! Colors are looked up by symbolic name and applied through a [`Style`],
//! which either emits ANSI escape sequences or passes text through untouched
//! when output is not going to a terminal.
//!
//! Whether to color at all follows `colored`'s policy: `NO_COLOR`,
//! `CLICOLOR`, `CLICOLOR_FORCE` and terminal detection on stdout.

use colored::control::SHOULD_COLORIZE;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    /// Looks up a color by name. Unknown names map to [`Color::Reset`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "purple" => Self::Purple,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            _ => Self::Reset,
        }
    }

    pub fn escape_code(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Purple => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[1;37m",
        }
    }
}

/// How colored text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Wraps text in ANSI escape sequences.
    #[default]
    Ansi,
    /// Leaves text untouched.
    Plain,
}

impl Style {
    /// Picks [`Style::Plain`] unless the environment and terminal allow colors.
    pub fn detect() -> Self {
        if SHOULD_COLORIZE.should_colorize() {
            Self::Ansi
        } else {
            Self::Plain
        }
    }

    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            Self::Ansi => format!("{}{}{}", color.escape_code(), text, RESET),
            Self::Plain => text.to_string(),
        }
    }

    pub fn paint_named(self, text: &str, color: &str) -> String {
        self.paint(text, Color::from_name(color))
    }
}
