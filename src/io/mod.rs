//! I/O helpers
//!
//! Readers used by the inserter to consume untrusted input in bounded chunks.

pub mod line_reader;

pub use line_reader::LineReader;
