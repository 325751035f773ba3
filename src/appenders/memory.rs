//! In-memory appender for capturing channel output

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Appender writing into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one handle and hand the
/// other to a router.
///
/// # Example
///
/// ```
/// use rust_level_router::appenders::MemoryAppender;
/// use rust_level_router::core::Appender;
///
/// let capture = MemoryAppender::new();
/// let mut sink = capture.clone();
/// sink.append("hello\n").unwrap();
/// assert_eq!(capture.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
