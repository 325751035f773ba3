//! Core router types and traits

pub mod appender;
pub mod channel;
pub mod config;
pub mod error;
pub mod global;
pub mod log_level;
pub mod metrics;
pub mod router;
pub mod style;
pub mod timestamp;

pub use appender::{shared, Appender, SharedAppender};
pub use channel::{Channel, ChannelSet};
pub use config::{
    CustomConfig, PrefixOverrides, Prefixes, RouterConfig, DEFAULT_DEBUG_PREFIX,
    DEFAULT_ERROR_PREFIX, DEFAULT_LOG_PREFIX, DEFAULT_SENTINEL, DEFAULT_WARN_PREFIX,
};
pub use error::{Result, RouterError};
pub use log_level::{LogLevel, Verbosity};
pub use metrics::RouterMetrics;
pub use router::{is_error, LevelRouter, LevelRouterBuilder, Terminator, FATAL_EXIT_CODE};
pub use style::Style;
pub use timestamp::TimestampFormat;
