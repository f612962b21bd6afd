//! # mime-magic-reader
//!
//! A reader for the shared MIME-info magic database (`/usr/share/mime/magic`).
//!
//! The database is a hybrid of text and binary: section headers such as
//! `[50:image/png]` are plain lines, while each rule line carries a
//! length-prefixed binary value and mask that may contain any byte, newlines
//! included. The reader decodes the whole file into an ordered list of
//! [`Section`]s, each with its ordered [`Content`] rules. Matching those rules
//! against files is left to the caller.
//!
//! ```no_run
//! use mime_magic_reader::MagicReader;
//!
//! let mut reader = MagicReader::open("/usr/share/mime/magic")?;
//! for section in reader.read_sections()? {
//!     println!("{} ({} rules)", section.filetype, section.contents.len());
//! }
//! # Ok::<(), mime_magic_reader::MagicError>(())
//! ```
pub mod magic;

// Re-export the main types for convenience
pub use magic::{
    display,
    read_sections,
    MagicReader,
    DEFAULT_MAGIC_PATH,
    types::{
        error::{MagicError, MagicErrorKind, Result},
        models::{Content, Section},
    },
};
