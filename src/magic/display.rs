//! Plain-text listing of decoded sections, as printed by the `mime-magic` binary.

use std::io::{self, Write};

use super::types::models::{Content, Section};

/// What to include for each rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Print the mask line.
    pub show_mask: bool,
    /// Print values as escaped strings instead of hex bytes.
    pub value_as_string: bool,
}

/// Writes every section in file order.
pub fn write_sections<W: Write>(
    out: &mut W,
    sections: &[Section],
    options: DisplayOptions,
) -> io::Result<()> {
    for section in sections {
        writeln!(out, "Filetype: {}", section.filetype)?;
        writeln!(out, "Priority: {}", section.priority)?;
        for content in &section.contents {
            if section.contents.len() > 1 {
                writeln!(out, " ~~~~~~~ ")?;
            }
            write_content(out, content, options)?;
        }
        writeln!(out, " ------- ")?;
    }
    Ok(())
}

fn write_content<W: Write>(out: &mut W, content: &Content, options: DisplayOptions) -> io::Result<()> {
    if options.value_as_string {
        let trimmed = trim_newlines(&content.value);
        writeln!(out, "Value: \"{}\"", trimmed.escape_ascii())?;
    } else {
        writeln!(out, "Value: {}", hex(&content.value))?;
    }
    if options.show_mask {
        writeln!(out, "Mask:  {}", hex(&content.mask))?;
    }
    writeln!(out, "Indent: {}", content.indent)?;
    writeln!(out, "Offset: {}", content.offset)?;
    if content.range_length != Content::DEFAULT_RANGE_LENGTH {
        writeln!(out, "Range: {}", content.range_length)?;
    }
    if content.word_size != Content::DEFAULT_WORD_SIZE {
        writeln!(out, "Word size: {}", content.word_size)?;
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips `\n` from both ends.
fn trim_newlines(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b'\n').unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != b'\n').map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> Section {
        Section {
            filetype: "image/png".to_string(),
            priority: 50,
            contents: vec![Content {
                indent: 0,
                offset: 0,
                value: b"\x89PNG".to_vec(),
                mask: vec![0xFF; 4],
                range_length: 1,
                word_size: 1,
            }],
        }
    }

    fn render(sections: &[Section], options: DisplayOptions) -> String {
        let mut out = Vec::new();
        write_sections(&mut out, sections, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_values_as_hex_by_default() {
        let text = render(&[png()], DisplayOptions::default());
        assert_eq!(
            text,
            "Filetype: image/png\nPriority: 50\nValue: 89 50 4e 47\nIndent: 0\nOffset: 0\n ------- \n"
        );
    }

    #[test]
    fn optional_lines_follow_options_and_rule_count() {
        let mut section = png();
        let mut second = section.contents[0].clone();
        second.value = b"\nab\n\n".to_vec();
        second.mask = vec![0x0F, 0xFF, 0xFF, 0xFF];
        second.indent = 1;
        second.offset = 8;
        second.range_length = 4;
        section.contents.push(second);

        let text = render(
            &[section],
            DisplayOptions {
                show_mask: true,
                value_as_string: true,
            },
        );
        assert_eq!(text.matches(" ~~~~~~~ \n").count(), 2);
        assert!(text.contains("Value: \"\\x89PNG\"\n"));
        assert!(text.contains("Value: \"ab\"\n"));
        assert!(text.contains("Mask:  0f ff ff ff\n"));
        assert!(text.contains("Range: 4\n"));
        assert!(!text.contains("Word size"));
    }

    #[test]
    fn trims_newlines_at_both_ends() {
        assert_eq!(trim_newlines(b"\na\nb\n\n"), b"a\nb");
        assert_eq!(trim_newlines(b"\n\n"), b"");
        assert_eq!(trim_newlines(b""), b"");
        assert_eq!(trim_newlines(b"ab"), b"ab");
    }
}
