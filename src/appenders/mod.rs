//! Appender implementations

pub mod console;
pub mod discard;
pub mod file;
pub mod memory;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use discard::DiscardAppender;
pub use file::FileAppender;
pub use memory::MemoryAppender;

// Re-export traits for convenience
pub use crate::core::{shared, Appender, SharedAppender};
