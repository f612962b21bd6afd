//! Core data structures for the magic database.
//!
//! A database is an ordered list of [`Section`]s, one per MIME type, each
//! holding the ordered [`Content`] rules that identify that type.

/// Detection rules for one MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// MIME type name, e.g. `image/png`.
    pub filetype: String,
    /// 0-100 by convention; higher means a more confident match.
    pub priority: u32,
    /// Rules in file order. Order and `indent` together describe the rule tree.
    pub contents: Vec<Content>,
}

impl Section {
    pub(crate) fn new(priority: u32, filetype: String) -> Self {
        Self {
            filetype,
            priority,
            contents: Vec::with_capacity(2),
        }
    }
}

/// A single binary pattern rule.
///
/// `mask` always has the same length as `value`. A rule without an explicit
/// mask gets an all-`0xFF` one, i.e. an exact comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Nesting depth relative to the previous rule in the section.
    pub indent: u32,
    /// Byte offset in the target file where matching starts.
    pub offset: u32,
    pub value: Vec<u8>,
    pub mask: Vec<u8>,
    /// Number of consecutive offsets, starting at `offset`, where the value may match.
    pub range_length: u32,
    /// Element width used for byte-order aware comparison.
    pub word_size: u32,
}

impl Content {
    pub const DEFAULT_INDENT: u32 = 0;
    pub const DEFAULT_RANGE_LENGTH: u32 = 1;
    pub const DEFAULT_WORD_SIZE: u32 = 1;

    /// Mask used when a rule carries none.
    pub fn exact_mask(len: usize) -> Vec<u8> {
        vec![0xFF; len]
    }

    /// Whether the mask actually filters any bits.
    pub fn has_mask(&self) -> bool {
        self.mask.iter().any(|&b| b != 0xFF)
    }
}
