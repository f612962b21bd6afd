//! Rule lines.
//!
//! # Rule Structure
//! ```text
//! [indent] '>' offset '=' [2 bytes] length (big-endian u16)
//!                         [length bytes] value
//!                         ['&' [length bytes] mask]
//!                         ['~' word-size]
//!                         ['+' range-length]
//!                         '\n'
//! ```
//!
//! The length prefix, value and mask are consumed by count, so their bytes are
//! never taken for structure even when they equal `\n`, `&`, `~` or `+`. The
//! rest of the line up to `\n` is the qualifier tail. A `+` or `~` in the tail
//! is a qualifier only when a decimal digit follows it; otherwise it is literal
//! value data.

use std::io::BufRead;
use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::magic::cursor::{LineCursor, LineSource};
use crate::magic::types::error::{MagicError, Result};
use crate::magic::types::models::Content;
use crate::magic::utils::{self, Cut};

/// Parses one rule starting at `line`, pulling more lines from `source` when
/// the payload runs past the first physical line.
pub(crate) fn parse<R: BufRead>(line: Vec<u8>, source: &mut LineSource<R>) -> Result<Content> {
    let mut cursor = LineCursor::new(line, source);
    let line_no = cursor.start_line();

    let indent = read_indent(&mut cursor)?;
    let offset = read_offset(&mut cursor)?;

    let len_bytes = cursor
        .take(2)?
        .ok_or_else(|| cursor.corrupted("stream ended inside the value length"))?;
    let len = BigEndian::read_u16(&len_bytes) as usize;

    let mut value = cursor.take(len)?.ok_or_else(|| {
        cursor.corrupted(format!("stream ended inside a {}-byte value", len))
    })?;

    let mut mask = if cursor.peek()? == Some(b'&') {
        cursor.advance(1);
        cursor.take(len)?.ok_or_else(|| {
            cursor.corrupted(format!("stream ended inside a {}-byte mask", len))
        })?
    } else {
        Content::exact_mask(len)
    };

    let raw_tail = read_tail(&mut cursor)?;
    let (range_length, tail) = read_qualifier(&raw_tail, b'+', "range length", line_no)?;
    let (word_size, literal) = read_qualifier(tail, b'~', "word size", line_no)?;

    if !literal.is_empty() {
        trace!(
            "Rule at line {}: {} tail bytes are value data: '{}'",
            line_no,
            literal.len(),
            literal.escape_ascii()
        );
        value.extend_from_slice(literal);
        mask.resize(value.len(), 0xFF);
    }

    trace!(
        "Rule at line {}: indent={} offset={} len={} range={} word={}",
        line_no,
        indent,
        offset,
        value.len(),
        range_length,
        word_size
    );

    Ok(Content {
        indent,
        offset,
        value,
        mask,
        range_length,
        word_size,
    })
}

/// Everything before `>`. An empty field means indent 0; a missing `>` is an error.
fn read_indent<R: BufRead>(cursor: &mut LineCursor<'_, R>) -> Result<u32> {
    let (indent, consumed) = match utils::cut(cursor.remaining(), b'>') {
        Cut::Found { left, .. } if left.is_empty() => (Content::DEFAULT_INDENT, 1),
        Cut::Found { left, .. } => {
            let indent = utils::parse_uint(left).ok_or_else(|| {
                cursor.corrupted(format!("invalid indent '{}'", left.escape_ascii()))
            })?;
            (indent, left.len() + 1)
        }
        Cut::Missing => return Err(cursor.corrupted("missing '>' before the offset")),
    };
    cursor.advance(consumed);
    Ok(indent)
}

/// Everything before `=`. Required.
fn read_offset<R: BufRead>(cursor: &mut LineCursor<'_, R>) -> Result<u32> {
    let (offset, consumed) = match utils::cut(cursor.remaining(), b'=') {
        Cut::Found { left, .. } => {
            let offset = utils::parse_uint(left).ok_or_else(|| {
                cursor.corrupted(format!("invalid offset '{}'", left.escape_ascii()))
            })?;
            (offset, left.len() + 1)
        }
        Cut::Missing => return Err(cursor.corrupted("missing '=' after the offset")),
    };
    cursor.advance(consumed);
    Ok(offset)
}

/// Bytes between the payload and the line terminator. The terminator is consumed.
fn read_tail<R: BufRead>(cursor: &mut LineCursor<'_, R>) -> Result<Vec<u8>> {
    if !cursor.fill(1)? {
        return Err(cursor.corrupted("stream ended before the line terminator"));
    }
    let Some(end) = cursor.remaining().iter().position(|&b| b == b'\n') else {
        return Err(cursor.corrupted("stream ended before the line terminator"));
    };
    let tail = cursor.remaining()[..end].to_vec();
    cursor.advance(end + 1);
    if !cursor.remaining().is_empty() {
        return Err(cursor.corrupted("trailing bytes after the line terminator"));
    }
    Ok(tail)
}

/// Optional `<marker><digits>` qualifier, cut from `tail` at the first `marker`.
///
/// Returns the qualifier (1 when absent) and what is left of the tail before
/// it. A marker not followed by a digit is data: the tail comes back whole.
fn read_qualifier<'t>(
    tail: &'t [u8],
    marker: u8,
    name: &str,
    line_no: usize,
) -> Result<(u32, &'t [u8])> {
    match utils::cut(tail, marker) {
        Cut::Found { left, right } if right.first().is_some_and(u8::is_ascii_digit) => {
            let value = utils::parse_uint(right).ok_or_else(|| {
                MagicError::content(
                    line_no,
                    format!("invalid {} '{}'", name, right.escape_ascii()),
                )
            })?;
            Ok((value, left))
        }
        Cut::Found { .. } | Cut::Missing => Ok((1, tail)),
    }
}
