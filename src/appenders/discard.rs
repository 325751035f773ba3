//! Appender that drops every line

use crate::core::{Appender, Result};

/// Destination for channels switched off by the verbosity level
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardAppender;

impl DiscardAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for DiscardAppender {
    fn append(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }

    fn discards(&self) -> bool {
        true
    }
}
