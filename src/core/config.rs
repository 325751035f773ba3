//! Router configuration types

use super::channel::ChannelSet;
use super::error::Result;
use super::log_level::Verbosity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBUG_PREFIX: &str = "[-] ";
pub const DEFAULT_LOG_PREFIX: &str = "[*] ";
pub const DEFAULT_WARN_PREFIX: &str = "[!] ";
pub const DEFAULT_ERROR_PREFIX: &str = "[ERROR] ";

/// Sentinel that selects the built-in prefix
pub const DEFAULT_SENTINEL: &str = "default";

/// Prefix text for the four prefixed channel families.
///
/// The fatal channel shares the error prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefixes {
    pub debug: String,
    pub log: String,
    pub warn: String,
    pub error: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            debug: DEFAULT_DEBUG_PREFIX.to_string(),
            log: DEFAULT_LOG_PREFIX.to_string(),
            warn: DEFAULT_WARN_PREFIX.to_string(),
            error: DEFAULT_ERROR_PREFIX.to_string(),
        }
    }
}

impl Prefixes {
    /// Resolve overrides: an empty string or `"default"` picks the built-in prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_level_router::core::Prefixes;
    ///
    /// let p = Prefixes::resolve("", "default", "x", "");
    /// assert_eq!(p.debug, "[-] ");
    /// assert_eq!(p.log, "[*] ");
    /// assert_eq!(p.warn, "x");
    /// assert_eq!(p.error, "[ERROR] ");
    /// ```
    pub fn resolve(debug: &str, log: &str, warn: &str, error: &str) -> Self {
        Self {
            debug: pick(debug, DEFAULT_DEBUG_PREFIX),
            log: pick(log, DEFAULT_LOG_PREFIX),
            warn: pick(warn, DEFAULT_WARN_PREFIX),
            error: pick(error, DEFAULT_ERROR_PREFIX),
        }
    }
}

fn pick(value: &str, fallback: &str) -> String {
    if value.is_empty() || value == DEFAULT_SENTINEL {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Prefix overrides as they appear in a serialized [`RouterConfig`].
///
/// Missing fields deserialize to empty strings, which resolve to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixOverrides {
    pub debug: String,
    pub log: String,
    pub warn: String,
    pub error: String,
}

impl PrefixOverrides {
    pub fn resolve(&self) -> Prefixes {
        Prefixes::resolve(&self.debug, &self.log, &self.warn, &self.error)
    }
}

/// Level-based configuration, loadable from JSON
///
/// # Example
///
/// ```
/// use rust_level_router::core::RouterConfig;
///
/// let config = RouterConfig::from_json_str(r#"{ "level": 2, "time_stamps": false }"#).unwrap();
/// assert_eq!(config.level, 2);
/// assert!(config.date_stamps);
/// assert!(!config.time_stamps);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub level: i64,
    pub date_stamps: bool,
    pub time_stamps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<PrefixOverrides>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            level: 4,
            date_stamps: true,
            time_stamps: true,
            prefixes: None,
        }
    }
}

impl RouterConfig {
    pub fn new(level: i64, date_stamps: bool, time_stamps: bool) -> Self {
        Self {
            level,
            date_stamps,
            time_stamps,
            prefixes: None,
        }
    }

    #[must_use]
    pub fn with_prefixes(mut self, prefixes: PrefixOverrides) -> Self {
        self.prefixes = Some(prefixes);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_level(self.level)
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::from_flags(self.date_stamps, self.time_stamps)
    }
}

/// A fully caller-built configuration.
///
/// Channels and prefixes are installed verbatim; nothing is validated.
#[derive(Debug, Clone)]
pub struct CustomConfig {
    pub channels: ChannelSet,
    pub prefixes: Prefixes,
}

impl CustomConfig {
    pub fn new(channels: ChannelSet, prefixes: Prefixes) -> Self {
        Self { channels, prefixes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouterError;

    #[test]
    fn test_default_prefixes() {
        let p = Prefixes::default();
        assert_eq!(p.debug, "[-] ");
        assert_eq!(p.log, "[*] ");
        assert_eq!(p.warn, "[!] ");
        assert_eq!(p.error, "[ERROR] ");
    }

    #[test]
    fn test_resolve_keeps_custom_values_verbatim() {
        let p = Prefixes::resolve("D ", " L", "Default", "E");
        assert_eq!(p.debug, "D ");
        assert_eq!(p.log, " L");
        // Sentinel match is exact
        assert_eq!(p.warn, "Default");
        assert_eq!(p.error, "E");
    }

    #[test]
    fn test_config_defaults() {
        let config = RouterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RouterConfig::default());
        assert_eq!(config.timestamp_format(), TimestampFormat::DateAndTime);
        assert_eq!(config.verbosity().get(), 4);
    }

    #[test]
    fn test_config_with_prefixes() {
        let config = RouterConfig::from_json_str(
            r#"{ "level": 7, "date_stamps": false, "prefixes": { "warn": "W: " } }"#,
        )
        .unwrap();

        assert_eq!(config.verbosity().get(), 4);
        assert_eq!(config.timestamp_format(), TimestampFormat::Time);

        let prefixes = config.prefixes.expect("prefixes present").resolve();
        assert_eq!(prefixes.warn, "W: ");
        assert_eq!(prefixes.debug, "[-] ");
    }

    #[test]
    fn test_invalid_json() {
        let err = RouterConfig::from_json_str(r#"{ "level": "loud" }"#).unwrap_err();
        assert!(matches!(err, RouterError::JsonError(_)));
    }
}
