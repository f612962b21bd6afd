//! Core MIME magic reader module

pub mod display;
pub mod format;
pub mod reader;
pub mod types;
pub mod utils;
mod cursor;

use std::path::Path;

pub use reader::MagicReader;
pub use types::error::{MagicError, MagicErrorKind, Result};
pub use types::models::{Content, Section};

/// Where shared-mime-info installs the compiled magic database.
pub const DEFAULT_MAGIC_PATH: &str = "/usr/share/mime/magic";

/// Opens, decodes and closes the database at `path`.
pub fn read_sections(path: impl AsRef<Path>) -> Result<Vec<Section>> {
    let mut reader = MagicReader::open(path)?;
    let sections = reader.read_sections()?;
    reader.close();
    Ok(sections)
}
