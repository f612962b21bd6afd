//! Test-only encoder producing the on-disk magic format.

#![allow(dead_code)]

use mime_magic_reader::{Content, Section};

pub const SIGNATURE: &[u8] = b"MIME-Magic\0\n";

/// Encodes a full database, signature included.
pub fn encode(sections: &[Section]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    for section in sections {
        encode_section(&mut out, section);
    }
    out
}

pub fn encode_section(out: &mut Vec<u8>, section: &Section) {
    out.extend_from_slice(format!("[{}:{}]\n", section.priority, section.filetype).as_bytes());
    for content in &section.contents {
        encode_content(out, content);
    }
}

/// Optional fields are omitted when they hold their default.
pub fn encode_content(out: &mut Vec<u8>, content: &Content) {
    assert_eq!(content.value.len(), content.mask.len(), "mask must match value");
    if content.indent != 0 {
        out.extend_from_slice(content.indent.to_string().as_bytes());
    }
    out.extend_from_slice(format!(">{}=", content.offset).as_bytes());
    let len = u16::try_from(content.value.len()).expect("value fits a u16 length");
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&content.value);
    if content.has_mask() {
        out.push(b'&');
        out.extend_from_slice(&content.mask);
    }
    if content.word_size != 1 {
        out.extend_from_slice(format!("~{}", content.word_size).as_bytes());
    }
    if content.range_length != 1 {
        out.extend_from_slice(format!("+{}", content.range_length).as_bytes());
    }
    out.push(b'\n');
}

/// A rule with every optional field at its default.
pub fn rule(offset: u32, value: &[u8]) -> Content {
    Content {
        indent: 0,
        offset,
        value: value.to_vec(),
        mask: vec![0xFF; value.len()],
        range_length: 1,
        word_size: 1,
    }
}

pub fn section(priority: u32, filetype: &str, contents: Vec<Content>) -> Section {
    Section {
        filetype: filetype.to_string(),
        priority,
        contents,
    }
}

/// Signature followed by `body`.
pub fn database(body: &[u8]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    out.extend_from_slice(body);
    out
}
