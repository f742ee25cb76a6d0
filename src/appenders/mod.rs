//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;

pub use crate::core::Appender;
