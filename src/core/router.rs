//! The level router
//!
//! A [`LevelRouter`] owns seven output channels and writes each message to the
//! channel matching its level. It starts with a built-in channel set and may be
//! configured exactly once, either from a verbosity level or from a fully
//! caller-built [`CustomConfig`]. Whichever configuration call runs first wins;
//! later calls return `false` and change nothing.
//!
//! # Concurrency
//!
//! Emitting never takes a router-level lock. The configured channel set lives
//! in a `OnceCell`, so concurrent first configurations resolve to exactly one
//! winner and readers see either the defaults or the complete configured set.
//! Each destination serializes its own writes; no ordering is promised between
//! lines from different threads.

use super::appender::{shared, Appender, SharedAppender};
use super::channel::{Channel, ChannelSet};
use super::config::{CustomConfig, Prefixes, RouterConfig};
use super::error::Result;
use super::log_level::{LogLevel, Verbosity};
use super::metrics::RouterMetrics;
use super::timestamp::TimestampFormat;
use crate::appenders::{ConsoleAppender, DiscardAppender};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal line
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called with [`FATAL_EXIT_CODE`] once a fatal line has been written.
///
/// The default terminator is [`std::process::exit`]. Tests can install one that
/// records the code instead, in which case the fatal operations return.
pub type Terminator = Arc<dyn Fn(i32) + Send + Sync>;

/// Unconfigured routers behave like this level with date and time stamps
const UNCONFIGURED_VERBOSITY: i64 = 3;

/// `true` when `result` holds an error
///
/// # Example
///
/// ```
/// use rust_level_router::is_error;
///
/// let ok: Result<u8, String> = Ok(1);
/// assert!(!is_error(&ok));
/// ```
pub fn is_error<T, E>(result: &std::result::Result<T, E>) -> bool {
    result.is_err()
}

/// Join an optional context and an error description: `"{context} | {err}"`
fn describe<E: fmt::Display + ?Sized>(context: &str, err: &E) -> String {
    if context.is_empty() {
        err.to_string()
    } else {
        format!("{} | {}", context, err)
    }
}

pub struct LevelRouter {
    defaults: ChannelSet,
    configured: OnceCell<ChannelSet>,
    prefixes: RwLock<Prefixes>,
    stdout: SharedAppender,
    stderr: SharedAppender,
    terminator: Terminator,
    metrics: RouterMetrics,
}

impl LevelRouter {
    /// Router writing to the process's standard output and standard error
    #[must_use]
    pub fn new() -> Self {
        LevelRouterBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LevelRouterBuilder {
        LevelRouterBuilder::new()
    }

    fn from_parts(stdout: SharedAppender, stderr: SharedAppender, terminator: Terminator) -> Self {
        let prefixes = Prefixes::default();
        let defaults = level_channels(
            Verbosity::from_level(UNCONFIGURED_VERBOSITY),
            TimestampFormat::DateAndTime,
            &prefixes,
            &stdout,
            &stderr,
        );

        Self {
            defaults,
            configured: OnceCell::new(),
            prefixes: RwLock::new(prefixes),
            stdout,
            stderr,
            terminator,
            metrics: RouterMetrics::new(),
        }
    }

    /// Configure the channels from a verbosity level.
    ///
    /// `level` is clamped into `0..=4`; see [`Verbosity`] for which channels
    /// stay active. The stamp flags apply to every prefixed channel. Channels
    /// capture the prefixes current at this moment.
    ///
    /// Returns `true` if this call configured the router, `false` if it had
    /// already been configured.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_level_router::LevelRouter;
    ///
    /// let router = LevelRouter::new();
    /// assert!(router.configure_by_level(2, true, false));
    /// assert!(!router.configure_by_level(4, true, true));
    /// ```
    pub fn configure_by_level(&self, level: i64, date_stamps: bool, time_stamps: bool) -> bool {
        let verbosity = Verbosity::from_level(level);
        let stamps = TimestampFormat::from_flags(date_stamps, time_stamps);

        self.install(|| {
            let prefixes = self.prefixes.read().clone();
            level_channels(verbosity, stamps, &prefixes, &self.stdout, &self.stderr)
        })
    }

    /// Install caller-built channels and prefixes verbatim.
    ///
    /// Shares the one-shot guard with [`configure_by_level`](Self::configure_by_level).
    /// A losing call drops `config` untouched.
    pub fn configure_custom(&self, config: CustomConfig) -> bool {
        let CustomConfig { channels, prefixes } = config;

        self.install(|| {
            *self.prefixes.write() = prefixes;
            channels
        })
    }

    /// Apply a [`RouterConfig`]: prefix overrides first, then the level.
    ///
    /// Prefix overrides are only applied when this call wins the guard.
    pub fn configure(&self, config: &RouterConfig) -> bool {
        let verbosity = config.verbosity();
        let stamps = config.timestamp_format();

        self.install(|| {
            if let Some(ref overrides) = config.prefixes {
                *self.prefixes.write() = overrides.resolve();
            }
            let prefixes = self.prefixes.read().clone();
            level_channels(verbosity, stamps, &prefixes, &self.stdout, &self.stderr)
        })
    }

    fn install(&self, build: impl FnOnce() -> ChannelSet) -> bool {
        let mut applied = false;
        self.configured.get_or_init(|| {
            applied = true;
            build()
        });
        applied
    }

    pub fn is_configured(&self) -> bool {
        self.configured.get().is_some()
    }

    fn channels(&self) -> &ChannelSet {
        self.configured.get().unwrap_or(&self.defaults)
    }

    /// The channel currently serving `level`
    pub fn channel(&self, level: LogLevel) -> &Channel {
        self.channels().get(level)
    }

    /// Replace the prefix table.
    ///
    /// Empty strings and `"default"` select the built-in prefix. The table is
    /// read when channels are built, so this does not change channels that
    /// already exist: call it before configuring.
    pub fn set_prefixes(&self, debug: &str, log: &str, warn: &str, error: &str) {
        *self.prefixes.write() = Prefixes::resolve(debug, log, warn, error);
    }

    pub fn prefixes(&self) -> Prefixes {
        self.prefixes.read().clone()
    }

    /// Write `message` to the channel for `level`.
    ///
    /// Write failures are counted in [`metrics`](Self::metrics) and otherwise
    /// ignored. Emitting on [`LogLevel::Fatal`] here only writes; use
    /// [`emit_fatal`](Self::emit_fatal) to terminate.
    pub fn emit(&self, level: LogLevel, message: impl AsRef<str>) {
        let channel = self.channel(level);
        if channel.is_discarding() {
            self.metrics.record_discarded();
            return;
        }
        match channel.write(message.as_ref()) {
            Ok(()) => self.metrics.record_written(),
            Err(_) => self.metrics.record_write_failure(),
        }
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Debug, message);
    }

    #[inline]
    pub fn debug_np(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::DebugNoPrefix, message);
    }

    #[inline]
    pub fn log(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Log, message);
    }

    #[inline]
    pub fn log_np(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::LogNoPrefix, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Warn, message);
    }

    /// Write `err` to the error channel, as `"{context} | {err}"` when
    /// `context` is non-empty.
    pub fn emit_error<E: fmt::Display + ?Sized>(&self, context: &str, err: &E) {
        self.emit(LogLevel::Error, describe(context, err));
    }

    /// Write `err` to the fatal channel, flush every channel, then terminate.
    ///
    /// Fatal output is never suppressed by the verbosity level.
    pub fn emit_fatal<E: fmt::Display + ?Sized>(&self, context: &str, err: &E) {
        self.emit(LogLevel::Fatal, describe(context, err));
        self.metrics.record_fatal();
        let _ = self.flush();
        (self.terminator)(FATAL_EXIT_CODE);
    }

    /// Report the error in `result`, if any, and say whether there was one.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_level_router::LevelRouter;
    ///
    /// let router = LevelRouter::new();
    /// let parsed = "42".parse::<u32>();
    /// assert!(!router.check_and_log("parsing port", &parsed));
    /// ```
    pub fn check_and_log<T, E: fmt::Display>(
        &self,
        context: &str,
        result: &std::result::Result<T, E>,
    ) -> bool {
        match result {
            Ok(_) => false,
            Err(err) => {
                self.emit_error(context, err);
                true
            }
        }
    }

    /// Report the error in `result` as fatal, terminating the process.
    /// Does nothing for `Ok`.
    pub fn check_and_fatal<T, E: fmt::Display>(
        &self,
        context: &str,
        result: &std::result::Result<T, E>,
    ) {
        if let Err(err) = result {
            self.emit_fatal(context, err);
        }
    }

    /// Flush every channel of the current set
    pub fn flush(&self) -> Result<()> {
        self.channels().flush()
    }

    pub fn metrics(&self) -> &RouterMetrics {
        &self.metrics
    }
}

impl Default for LevelRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LevelRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelRouter")
            .field("configured", &self.is_configured())
            .field("prefixes", &*self.prefixes.read())
            .field("channels", self.channels())
            .finish()
    }
}

/// Build the channel set for a verbosity level.
///
/// Active debug/log/warn channels share `stdout`; error and fatal share
/// `stderr`. Inactive channels get their own discard sink.
fn level_channels(
    verbosity: Verbosity,
    stamps: TimestampFormat,
    prefixes: &Prefixes,
    stdout: &SharedAppender,
    stderr: &SharedAppender,
) -> ChannelSet {
    let build = |level: LogLevel, prefix: &str| {
        let destination = match level {
            _ if !verbosity.admits(level) => shared(DiscardAppender),
            LogLevel::Error | LogLevel::Fatal => Arc::clone(stderr),
            _ => Arc::clone(stdout),
        };
        Channel::for_level(level, destination, prefix, stamps)
    };

    ChannelSet {
        debug: build(LogLevel::Debug, &prefixes.debug),
        debug_no_prefix: build(LogLevel::DebugNoPrefix, ""),
        log: build(LogLevel::Log, &prefixes.log),
        log_no_prefix: build(LogLevel::LogNoPrefix, ""),
        warn: build(LogLevel::Warn, &prefixes.warn),
        error: build(LogLevel::Error, &prefixes.error),
        fatal: build(LogLevel::Fatal, &prefixes.error),
    }
}

/// Builder for [`LevelRouter`]
///
/// # Example
///
/// ```
/// use rust_level_router::prelude::*;
/// use std::sync::Arc;
///
/// let out = MemoryAppender::new();
/// let router = LevelRouter::builder()
///     .stdout(out.clone())
///     .terminator(Arc::new(|_code: i32| {}))
///     .build();
///
/// router.log_np("captured");
/// assert_eq!(out.lines(), vec!["captured".to_string()]);
/// ```
pub struct LevelRouterBuilder {
    stdout: Option<SharedAppender>,
    stderr: Option<SharedAppender>,
    terminator: Option<Terminator>,
}

impl LevelRouterBuilder {
    pub fn new() -> Self {
        Self {
            stdout: None,
            stderr: None,
            terminator: None,
        }
    }

    /// Destination used in place of standard output
    #[must_use = "builder methods return a new value"]
    pub fn stdout<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.stdout = Some(shared(appender));
        self
    }

    /// Destination used in place of standard error
    #[must_use = "builder methods return a new value"]
    pub fn stderr<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.stderr = Some(shared(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = Some(terminator);
        self
    }

    pub fn build(self) -> LevelRouter {
        let stdout = self
            .stdout
            .unwrap_or_else(|| shared(ConsoleAppender::stdout()));
        let stderr = self
            .stderr
            .unwrap_or_else(|| shared(ConsoleAppender::stderr()));
        let terminator: Terminator = match self.terminator {
            Some(terminator) => terminator,
            None => Arc::new(|code: i32| {
                std::process::exit(code);
            }),
        };

        LevelRouter::from_parts(stdout, stderr, terminator)
    }
}

impl Default for LevelRouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
