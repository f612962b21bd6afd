//! Custom error types for the mime-magic-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every structural error is fatal: the decoder never skips a broken record,
/// so a caller either gets the complete rule set or one of these.
#[derive(Debug, Error)]
pub enum MagicError {
    /// An error originating from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with the `MIME-Magic\0\n` signature.
    #[error("File is not a MIME magic file")]
    NotMagicFormat,

    /// A `[priority:filetype]` line is malformed, a rule line appeared before any
    /// section header, or a section ended without rules.
    #[error("Section header is not readable (line {line}): {reason}")]
    HeaderCorrupted { line: usize, reason: String },

    /// A rule line is malformed or its payload is cut short by the end of the stream.
    #[error("Section content is not readable (line {line}): {reason}")]
    ContentCorrupted { line: usize, reason: String },
}

/// Fieldless view of [`MagicError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicErrorKind {
    Io,
    NotMagicFormat,
    HeaderCorrupted,
    ContentCorrupted,
}

impl MagicError {
    pub fn kind(&self) -> MagicErrorKind {
        match self {
            MagicError::Io(_) => MagicErrorKind::Io,
            MagicError::NotMagicFormat => MagicErrorKind::NotMagicFormat,
            MagicError::HeaderCorrupted { .. } => MagicErrorKind::HeaderCorrupted,
            MagicError::ContentCorrupted { .. } => MagicErrorKind::ContentCorrupted,
        }
    }

    /// Line number the error points at, if it is a format error.
    pub fn line(&self) -> Option<usize> {
        match self {
            MagicError::HeaderCorrupted { line, .. } | MagicError::ContentCorrupted { line, .. } => {
                Some(*line)
            }
            MagicError::Io(_) | MagicError::NotMagicFormat => None,
        }
    }

    pub(crate) fn header(line: usize, reason: impl Into<String>) -> Self {
        MagicError::HeaderCorrupted { line, reason: reason.into() }
    }

    pub(crate) fn content(line: usize, reason: impl Into<String>) -> Self {
        MagicError::ContentCorrupted { line, reason: reason.into() }
    }
}

/// A convenience `Result` type alias using the crate's `MagicError` type.
pub type Result<T> = std::result::Result<T, MagicError>;
