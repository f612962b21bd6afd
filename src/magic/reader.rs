use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use log::{debug, info, trace};

use super::cursor::LineSource;
use super::format;
use super::types::error::{MagicError, Result};
use super::types::models::Section;

/// Decoder for the shared MIME-info magic database.
///
/// Construction checks the file signature; [`read_sections`](Self::read_sections)
/// then decodes the rest of the stream. The reader owns the stream and releases
/// it when dropped or [closed](Self::close).
#[derive(Debug)]
pub struct MagicReader<R> {
    source: LineSource<BufReader<R>>,
}

impl MagicReader<File> {
    /// Opens a magic database file and checks its signature.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file does not start with `MIME-Magic\0\n`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening MIME magic file: {}", path.display());
        let file = File::open(path)?;
        Self::new(file)
    }
}

impl<'a> MagicReader<&'a [u8]> {
    /// Reads a database that is already in memory.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl<R: Read> MagicReader<R> {
    /// Wraps any byte stream positioned at the start of a magic database.
    ///
    /// The signature is checked here, before anything else is read.
    pub fn new(inner: R) -> Result<Self> {
        let mut reader = BufReader::new(inner);
        format::signature::check(&mut reader)?;
        trace!("Signature ok");
        Ok(Self {
            // The signature is line 1.
            source: LineSource::new(reader, 1),
        })
    }

    /// Decodes every remaining section in the stream.
    ///
    /// Either the whole rule set is returned or the first error found; the
    /// reader never skips a broken record. Every returned section has at least
    /// one rule.
    pub fn read_sections(&mut self) -> Result<Vec<Section>> {
        let mut sections: Vec<Section> = Vec::with_capacity(10);
        let mut header_line = 0;

        while let Some(line) = self.source.next_line()? {
            let line_no = self.source.line_no();
            trace!("Line {}: {}", line_no, line.escape_ascii());

            if line.first() == Some(&b'[') {
                ensure_rules(sections.last(), header_line)?;
                let section = format::section::parse(&line, line_no)?;
                debug!(
                    "Section at line {}: {} (priority {})",
                    line_no, section.filetype, section.priority
                );
                sections.push(section);
                header_line = line_no;
            } else {
                let Some(current) = sections.last_mut() else {
                    return Err(MagicError::header(line_no, "found a rule line, expected a section header"));
                };
                let content = format::content::parse(line, &mut self.source)?;
                current.contents.push(content);
            }
        }
        ensure_rules(sections.last(), header_line)?;

        info!(
            "Decoded {} sections with {} rules",
            sections.len(),
            sections.iter().map(|s| s.contents.len()).sum::<usize>()
        );
        Ok(sections)
    }

    /// Releases the underlying stream.
    pub fn close(self) {
        drop(self.into_inner());
    }

    /// Gives back the underlying stream, positioned wherever decoding stopped.
    pub fn into_inner(self) -> R {
        self.source.into_inner().into_inner()
    }
}

/// A section header must be followed by at least one rule.
fn ensure_rules(section: Option<&Section>, header_line: usize) -> Result<()> {
    match section {
        Some(section) if section.contents.is_empty() => Err(MagicError::header(
            header_line,
            format!("section {} has no rules", section.filetype),
        )),
        _ => Ok(()),
    }
}
