//! `[priority:filetype]` section header lines.

use crate::magic::types::error::{MagicError, Result};
use crate::magic::types::models::Section;
use crate::magic::utils::{self, Cut};

/// Parses a header line, terminator included, into an empty [`Section`].
///
/// `line_no` is only used for error reporting.
pub fn parse(line: &[u8], line_no: usize) -> Result<Section> {
    let inner = line
        .strip_prefix(b"[")
        .and_then(|rest| rest.strip_suffix(b"]\n"))
        .ok_or_else(|| {
            MagicError::header(
                line_no,
                format!("expected '[priority:filetype]', got '{}'", line.escape_ascii()),
            )
        })?;

    let (priority, filetype) = match utils::cut(inner, b':') {
        Cut::Found { left, right } => (left, right),
        Cut::Missing => {
            return Err(MagicError::header(
                line_no,
                format!("missing ':' in '{}'", inner.escape_ascii()),
            ));
        }
    };

    let priority = utils::parse_uint(priority).ok_or_else(|| {
        MagicError::header(
            line_no,
            format!("invalid priority '{}'", priority.escape_ascii()),
        )
    })?;

    let filetype = std::str::from_utf8(filetype)
        .map_err(|e| MagicError::header(line_no, format!("filetype is not UTF-8: {}", e)))?;

    Ok(Section::new(priority, filetype.to_owned()))
}
