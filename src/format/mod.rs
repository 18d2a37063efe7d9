//! Line-oriented text format: a declared vertex count, then `u v w` lines.

pub mod reader;

pub use reader::{GraphReader, ReaderOptions};
