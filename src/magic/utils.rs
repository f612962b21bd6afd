//! Low-level token helpers shared by the header and rule parsers.

/// Result of splitting a buffer at a delimiter.
///
/// `Missing` is distinct from `Found` with an empty `left`: the first means the
/// delimiter is absent, the second that the field before it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut<'a> {
    Found { left: &'a [u8], right: &'a [u8] },
    Missing,
}

/// Split `buf` at the first occurrence of `delim`. The delimiter belongs to neither side.
pub fn cut(buf: &[u8], delim: u8) -> Cut<'_> {
    match buf.iter().position(|&b| b == delim) {
        Some(idx) => Cut::Found {
            left: &buf[..idx],
            right: &buf[idx + 1..],
        },
        None => Cut::Missing,
    }
}

/// Parse an unsigned base-10 number.
///
/// No sign, no whitespace. Returns `None` for empty input, any non-digit byte,
/// or a value that does not fit in a `u32`.
pub fn parse_uint(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

/// Length of the run of ASCII digits at the start of `buf`.
pub fn digit_run(buf: &[u8]) -> usize {
    buf.iter().take_while(|b| b.is_ascii_digit()).count()
}
