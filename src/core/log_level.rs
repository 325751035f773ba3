//! Channel levels and the numeric verbosity threshold

use super::error::RouterError;
use super::style::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven output channels a router owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    DebugNoPrefix,
    Log,
    LogNoPrefix,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::DebugNoPrefix,
        LogLevel::Log,
        LogLevel::LogNoPrefix,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::DebugNoPrefix => "DEBUG_NP",
            LogLevel::Log => "LOG",
            LogLevel::LogNoPrefix => "LOG_NP",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Whether lines on this channel carry a prefix and timestamp
    pub fn has_prefix(&self) -> bool {
        !matches!(self, LogLevel::DebugNoPrefix | LogLevel::LogNoPrefix)
    }

    pub fn default_style(&self) -> Style {
        match self {
            LogLevel::Debug | LogLevel::DebugNoPrefix | LogLevel::Log | LogLevel::LogNoPrefix => {
                Style::green()
            }
            LogLevel::Warn => Style::magenta(),
            LogLevel::Error | LogLevel::Fatal => Style::red(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "DEBUG_NP" | "DEBUGNOPREFIX" => Ok(LogLevel::DebugNoPrefix),
            "LOG" => Ok(LogLevel::Log),
            "LOG_NP" | "LOGNOPREFIX" => Ok(LogLevel::LogNoPrefix),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(RouterError::invalid_level(s)),
        }
    }
}

/// Numeric verbosity threshold, clamped into `0..=4`.
///
/// | level | debug | log | warn | error |
/// |-------|-------|-----|------|-------|
/// | 4     | on    | on  | on   | on    |
/// | 3     | off   | on  | on   | on    |
/// | 2     | off   | off | on   | on    |
/// | 1     | off   | off | off  | on    |
/// | 0     | off   | off | off  | off   |
///
/// Fatal output is admitted at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const SILENT: Verbosity = Verbosity(0);
    pub const ALL: Verbosity = Verbosity(4);

    /// Clamp an arbitrary integer level: values above 4 act as 4, below 0 as 0.
    pub fn from_level(level: i64) -> Self {
        Verbosity(level.clamp(0, 4) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Whether a channel writes to its real destination at this verbosity
    pub fn admits(&self, level: LogLevel) -> bool {
        let required = match level {
            LogLevel::Debug | LogLevel::DebugNoPrefix => 4,
            LogLevel::Log | LogLevel::LogNoPrefix => 3,
            LogLevel::Warn => 2,
            LogLevel::Error => 1,
            LogLevel::Fatal => return true,
        };
        self.0 >= required
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::ALL
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
