//! Prefix styling
//!
//! A [`Style`] decorates the prefix text of a channel and nothing else. Whether
//! escape codes are actually produced is decided by `colored`, which turns them
//! off for non-terminal output unless forced through `CLICOLOR_FORCE`.

use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub const fn new(color: Color, bold: bool) -> Self {
        Self {
            color: Some(color),
            bold,
        }
    }

    /// No decoration at all
    pub const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
        }
    }

    pub const fn green() -> Self {
        Self::new(Color::Green, true)
    }

    pub const fn magenta() -> Self {
        Self::new(Color::Magenta, true)
    }

    pub const fn red() -> Self {
        Self::new(Color::Red, true)
    }

    pub const fn blue() -> Self {
        Self::new(Color::Blue, true)
    }

    pub const fn yellow() -> Self {
        Self::new(Color::Yellow, true)
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold
    }

    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() || self.is_plain() {
            return text.to_string();
        }

        let mut styled = match self.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
