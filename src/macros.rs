//! Formatting macros for the emit operations.
//!
//! Each macro formats its arguments like `format!` and hands the result to the
//! matching [`LevelRouter`](crate::LevelRouter) method.
//!
//! # Examples
//!
//! ```
//! use rust_level_router::prelude::*;
//! use rust_level_router::{log, warn};
//!
//! let router = LevelRouter::new();
//!
//! log!(router, "Server started");
//!
//! let port = 8080;
//! log!(router, "Listening on port {}", port);
//! warn!(router, "{} connections rejected", 3);
//! ```

/// Emit a formatted message on a given channel.
///
/// # Examples
///
/// ```
/// # use rust_level_router::prelude::*;
/// # let router = LevelRouter::new();
/// use rust_level_router::emit;
/// emit!(router, LogLevel::Log, "Simple message");
/// emit!(router, LogLevel::Warn, "Retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! emit {
    ($router:expr, $level:expr, $($arg:tt)+) => {
        $router.emit($level, format!($($arg)+))
    };
}

/// Emit on the debug channel.
#[macro_export]
macro_rules! debug {
    ($router:expr, $($arg:tt)+) => {
        $crate::emit!($router, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emit on the debug channel without prefix or timestamp.
#[macro_export]
macro_rules! debug_np {
    ($router:expr, $($arg:tt)+) => {
        $crate::emit!($router, $crate::LogLevel::DebugNoPrefix, $($arg)+)
    };
}

/// Emit on the log channel.
///
/// # Examples
///
/// ```
/// # use rust_level_router::prelude::*;
/// # let router = LevelRouter::new();
/// use rust_level_router::log;
/// log!(router, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! log {
    ($router:expr, $($arg:tt)+) => {
        $crate::emit!($router, $crate::LogLevel::Log, $($arg)+)
    };
}

/// Emit on the log channel without prefix or timestamp.
#[macro_export]
macro_rules! log_np {
    ($router:expr, $($arg:tt)+) => {
        $crate::emit!($router, $crate::LogLevel::LogNoPrefix, $($arg)+)
    };
}

/// Emit on the warn channel.
#[macro_export]
macro_rules! warn {
    ($router:expr, $($arg:tt)+) => {
        $crate::emit!($router, $crate::LogLevel::Warn, $($arg)+)
    };
}
