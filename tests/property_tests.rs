//! Property-based tests using proptest
//!
//! Databases are generated as models, written with the test encoder, and
//! decoded again.

mod common;

use proptest::collection::vec;
use proptest::prelude::*;

use common::{encode, section};
use mime_magic_reader::{Content, MagicReader, Section};

/// Strategy for rules with arbitrary payload bytes and an optional mask
fn content_strategy() -> impl Strategy<Value = Content> {
    (
        0u32..4,
        any::<u32>(),
        vec(any::<u8>(), 0..64),
        any::<bool>(),
        prop_oneof![Just(1u32), 1u32..4096],
        prop_oneof![Just(1u32), Just(2), Just(4)],
    )
        .prop_flat_map(|(indent, offset, value, masked, range_length, word_size)| {
            let len = value.len();
            let mask = if masked {
                vec(any::<u8>(), len).boxed()
            } else {
                Just(vec![0xFF; len]).boxed()
            };
            mask.prop_map(move |mask| Content {
                indent,
                offset,
                value: value.clone(),
                mask,
                range_length,
                word_size,
            })
        })
}

/// Strategy for sections with at least one rule
fn section_strategy() -> impl Strategy<Value = Section> {
    (
        0u32..=100,
        "[a-z]{1,12}/[a-z0-9.+-]{1,20}",
        vec(content_strategy(), 1..5),
    )
        .prop_map(|(priority, filetype, contents)| section(priority, &filetype, contents))
}

/// Strategy for values that contain qualifier and delimiter bytes
fn tricky_value_strategy() -> impl Strategy<Value = Vec<u8>> {
    vec(
        prop_oneof![
            Just(b'+'),
            Just(b'~'),
            Just(b'&'),
            Just(b'\n'),
            Just(b'['),
            Just(b'>'),
            Just(b'='),
            b'0'..=b'9',
        ],
        1..32,
    )
}

proptest! {
    /// Encoding a model and decoding it gives the same model back
    #[test]
    fn encoded_databases_decode_to_the_same_model(sections in vec(section_strategy(), 0..6)) {
        let bytes = encode(&sections);
        let decoded = MagicReader::from_bytes(&bytes).unwrap().read_sections().unwrap();
        prop_assert!(decoded.iter().all(|s| !s.contents.is_empty()));
        prop_assert_eq!(decoded, sections);
    }

    /// Delimiter-like bytes inside a value never leak into qualifiers
    #[test]
    fn qualifier_bytes_stay_inside_value(value in tricky_value_strategy()) {
        let rule = Content {
            indent: 0,
            offset: 0,
            mask: vec![0xFF; value.len()],
            value,
            range_length: 1,
            word_size: 1,
        };
        let bytes = encode(&[section(50, "text/x-tricky", vec![rule.clone()])]);
        let decoded = MagicReader::from_bytes(&bytes).unwrap().read_sections().unwrap();
        prop_assert_eq!(&decoded[0].contents, &vec![rule]);
    }
}
