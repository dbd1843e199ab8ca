//! Line-oriented text files
//!
//! Input URL lists and append payloads are read one entry per line;
//! results and keyword matches are written back the same way.

pub mod reader;
pub mod writer;

// Re-export commonly used items
pub use reader::{LineReader, ReadLines};
pub use writer::write_lines;
