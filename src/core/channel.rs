//! Output channels
//!
//! A [`Channel`] is one named output path: a destination, the style applied to
//! its prefix, the prefix text and the timestamp format. Every field is fixed
//! once the channel is built; the router swaps whole channel sets instead of
//! mutating channels in place.

use super::appender::{shared, SharedAppender};
use super::error::Result;
use super::log_level::LogLevel;
use super::style::Style;
use super::timestamp::TimestampFormat;
use crate::appenders::DiscardAppender;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

#[derive(Clone)]
pub struct Channel {
    appender: SharedAppender,
    style: Style,
    prefix: String,
    timestamp: TimestampFormat,
    discarding: bool,
}

impl Channel {
    /// A channel with no prefix, no style and no timestamp
    pub fn new(appender: SharedAppender) -> Self {
        let discarding = appender.lock().discards();
        Self {
            appender,
            style: Style::plain(),
            prefix: String::new(),
            timestamp: TimestampFormat::None,
            discarding,
        }
    }

    /// A channel whose lines are dropped
    pub fn discard() -> Self {
        Self::new(shared(DiscardAppender))
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }

    /// Build a channel for `level` with that level's default style.
    ///
    /// No-prefix levels ignore `prefix` and `timestamp`.
    pub(crate) fn for_level(
        level: LogLevel,
        appender: SharedAppender,
        prefix: &str,
        timestamp: TimestampFormat,
    ) -> Self {
        let channel = Channel::new(appender).with_style(level.default_style());
        if level.has_prefix() {
            channel.with_prefix(prefix).with_timestamp(timestamp)
        } else {
            channel
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp
    }

    /// True when the destination drops every line
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }

    /// Name of the destination appender
    pub fn destination(&self) -> String {
        self.appender.lock().name().to_string()
    }

    /// `<styled prefix><timestamp><message>\n`
    pub fn format_line<Tz>(&self, message: &str, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let prefix = self.style.paint(&self.prefix);
        let stamp = self.timestamp.format(now);

        let mut line = String::with_capacity(prefix.len() + stamp.len() + message.len() + 1);
        line.push_str(&prefix);
        line.push_str(&stamp);
        line.push_str(message);
        line.push('\n');
        line
    }

    /// Format `message` with the current local time and write it
    pub fn write(&self, message: &str) -> Result<()> {
        if self.discarding {
            return Ok(());
        }
        let line = self.format_line(message, &Local::now());
        self.appender.lock().append(&line)
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("destination", &self.destination())
            .field("style", &self.style)
            .field("prefix", &self.prefix)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// The seven channels a router writes through
#[derive(Debug, Clone)]
pub struct ChannelSet {
    pub debug: Channel,
    pub debug_no_prefix: Channel,
    pub log: Channel,
    pub log_no_prefix: Channel,
    pub warn: Channel,
    pub error: Channel,
    pub fatal: Channel,
}

impl ChannelSet {
    pub fn get(&self, level: LogLevel) -> &Channel {
        match level {
            LogLevel::Debug => &self.debug,
            LogLevel::DebugNoPrefix => &self.debug_no_prefix,
            LogLevel::Log => &self.log,
            LogLevel::LogNoPrefix => &self.log_no_prefix,
            LogLevel::Warn => &self.warn,
            LogLevel::Error => &self.error,
            LogLevel::Fatal => &self.fatal,
        }
    }

    /// Flush every channel, returning the first failure
    pub fn flush(&self) -> Result<()> {
        let mut first_err = None;
        for level in LogLevel::ALL {
            if let Err(e) = self.get(level).flush() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
