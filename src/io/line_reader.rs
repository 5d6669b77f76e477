//! Bounded line reader
//!
//! Splits a byte stream into lines the way a line scanner does: the `\n`
//! terminator is dropped, as is a single `\r` right before it, and a final
//! unterminated line is still returned. Reading stops once the byte ceiling
//! is consumed, even in the middle of a line.

use std::io::{self, BufRead, BufReader, Read, Take};

/// Line reader over a stream capped at a fixed number of bytes
pub struct LineReader<R> {
    /// Buffered, size-limited source
    inner: BufReader<Take<R>>,
    /// Reused storage for the current line
    line: Vec<u8>,
    /// Total bytes consumed so far, terminators included
    bytes_read: u64,
}

impl<R: Read> LineReader<R> {
    /// Create a line reader that never consumes more than `limit` bytes
    pub fn new(reader: R, limit: u64) -> Self {
        LineReader {
            inner: BufReader::new(reader.take(limit)),
            line: Vec::new(),
            bytes_read: 0,
        }
    }

    /// Read the next line without its terminator
    ///
    /// # Returns
    /// `Ok(None)` once the stream is exhausted or the ceiling is reached
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();

        let read = self.inner.read_until(b'\n', &mut self.line)?;
        if read == 0 {
            return Ok(None);
        }
        self.bytes_read += read as u64;

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
        }
        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }

        Ok(Some(&self.line))
    }

    /// Whether the byte ceiling has been used up
    pub fn limit_reached(&self) -> bool {
        self.inner.get_ref().limit() == 0 && self.inner.buffer().is_empty()
    }

    /// Number of bytes handed out so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
