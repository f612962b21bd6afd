//! Line-oriented input with length-driven refills.
//!
//! The database is read one `\n`-terminated line at a time, but a rule's raw
//! payload may contain `\n` bytes, so a rule can span several physical lines.
//! [`LineSource`] hands out physical lines; [`LineCursor`] owns the bytes of
//! the rule being parsed and pulls further raw lines from the source whenever a
//! length-prefixed field needs more bytes than are buffered.

use std::io::BufRead;
use log::trace;

use super::types::error::{MagicError, Result};

/// Forward-only reader of physical lines.
#[derive(Debug)]
pub(crate) struct LineSource<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> LineSource<R> {
    /// `line_no` is the number of lines already consumed from `reader`.
    pub fn new(reader: R, line_no: usize) -> Self {
        Self { reader, line_no }
    }

    /// Reads the next line, `\n` included when present.
    ///
    /// Returns `None` at a clean end of stream. The last line of a stream may
    /// lack its terminator.
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(buf))
    }

    /// 1-based number of the last line handed out.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Cursor over the bytes of one rule.
///
/// Parsing steps consume from the front; `remaining()` is always the
/// unconsumed part.
pub(crate) struct LineCursor<'s, R> {
    buf: Vec<u8>,
    pos: usize,
    start_line: usize,
    source: &'s mut LineSource<R>,
}

impl<'s, R: BufRead> LineCursor<'s, R> {
    /// Starts a cursor on `line`, which must be the line most recently read from `source`.
    pub fn new(line: Vec<u8>, source: &'s mut LineSource<R>) -> Self {
        let start_line = source.line_no();
        Self {
            buf: line,
            pos: 0,
            start_line,
            source,
        }
    }

    pub fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Marks `n` buffered bytes as consumed.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining().len());
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Makes sure at least `n` unconsumed bytes are buffered.
    ///
    /// Pulls whole raw lines from the source; their bytes are payload, never
    /// structure. Returns `false` if the stream ends first.
    pub fn fill(&mut self, n: usize) -> Result<bool> {
        while self.remaining().len() < n {
            match self.source.next_line()? {
                Some(more) => {
                    trace!(
                        "Line {}: appended {} raw bytes to rule from line {}",
                        self.source.line_no(),
                        more.len(),
                        self.start_line
                    );
                    self.buf.extend_from_slice(&more);
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Consumes exactly `n` bytes, refilling as needed. `None` if the stream ends first.
    pub fn take(&mut self, n: usize) -> Result<Option<Vec<u8>>> {
        if !self.fill(n)? {
            return Ok(None);
        }
        let bytes = self.buf[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(Some(bytes))
    }

    /// Next unconsumed byte, refilling if the buffer is exhausted.
    pub fn peek(&mut self) -> Result<Option<u8>> {
        if !self.fill(1)? {
            return Ok(None);
        }
        Ok(Some(self.buf[self.pos]))
    }

    /// Line on which the rule started.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// `ContentCorrupted` pointing at the rule's first line.
    pub fn corrupted(&self, reason: impl Into<String>) -> MagicError {
        MagicError::content(self.start_line, reason)
    }
}
