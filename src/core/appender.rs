//! Appender trait for channel destinations

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination that accepts fully formatted lines.
///
/// `line` already ends with a newline; appenders write it as-is.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether this destination drops every line it receives
    fn discards(&self) -> bool {
        false
    }
}

/// An appender several channels can write to
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Wrap an appender so it can be handed to more than one channel
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(Box::new(appender)))
}
