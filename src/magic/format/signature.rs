//! File signature check.

use std::io::{ErrorKind, Read};
use log::debug;

use crate::magic::types::error::{MagicError, Result};

/// The 12 bytes every magic database starts with.
pub const SIGNATURE: &[u8; 12] = b"MIME-Magic\0\n";

/// Reads exactly [`SIGNATURE`]'s length from `reader` and compares it.
///
/// A stream shorter than the signature is `NotMagicFormat`, not an I/O error.
pub fn check<R: Read>(reader: &mut R) -> Result<()> {
    let mut sign = [0u8; SIGNATURE.len()];
    match reader.read_exact(&mut sign) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            debug!("Stream ended before the {}-byte signature", SIGNATURE.len());
            return Err(MagicError::NotMagicFormat);
        }
        Err(e) => return Err(e.into()),
    }

    if &sign != SIGNATURE {
        debug!("Bad signature: {}", sign.escape_ascii());
        return Err(MagicError::NotMagicFormat);
    }
    Ok(())
}
