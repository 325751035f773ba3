//! # Rust Level Router
//!
//! A leveled console logger. Messages go to one of seven channels (debug,
//! debug without prefix, log, log without prefix, warn, error, fatal), each with
//! its own destination, prefix style, prefix text and timestamp format.
//!
//! ## Features
//!
//! - **Verbosity levels**: a single number from 0 to 4 decides which channels write
//! - **One-shot configuration**: the first configuration call wins, safely across threads
//! - **Custom channels**: route any channel to any [`Appender`]
//! - **Fatal reporting**: log and terminate, with an injectable terminator for tests
//!
//! ```
//! use rust_level_router::prelude::*;
//!
//! let router = LevelRouter::new();
//! router.configure_by_level(3, true, true);
//!
//! router.debug("not shown at level 3");
//! router.log("listening");
//!
//! let port = "80a".parse::<u16>();
//! if router.check_and_log("parsing port", &port) {
//!     router.warn("falling back to 8080");
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub use crate::core::global;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, DiscardAppender, FileAppender, MemoryAppender,
    };
    pub use crate::core::{
        is_error, shared, Appender, Channel, ChannelSet, CustomConfig, LevelRouter,
        LevelRouterBuilder, LogLevel, PrefixOverrides, Prefixes, Result, RouterConfig,
        RouterError, RouterMetrics, SharedAppender, Style, Terminator, TimestampFormat,
        Verbosity, FATAL_EXIT_CODE,
    };
}

pub use appenders::{ConsoleAppender, DiscardAppender, FileAppender, MemoryAppender};
pub use core::{
    is_error, shared, Appender, Channel, ChannelSet, CustomConfig, LevelRouter,
    LevelRouterBuilder, LogLevel, PrefixOverrides, Prefixes, Result, RouterConfig, RouterError,
    RouterMetrics, SharedAppender, Style, Terminator, TimestampFormat, Verbosity,
    FATAL_EXIT_CODE,
};
