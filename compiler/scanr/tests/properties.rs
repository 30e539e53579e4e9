//! Property-based tests for the built-in grammar.
//!
//! These check laws that must hold for any input: the items of a complete
//! scan tile the input exactly, and the address recognizer accepts precisely
//! the canonical dotted quads.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use scanr::{ItemKind, Scanner};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    }
}

/// Inputs biased towards the characters the recognizers care about.
fn scanner_input() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
            Just('.'),
            Just('-'),
            Just('_'),
            Just('é'),
            proptest::char::range('0', '9'),
            proptest::char::range('a', 'z'),
            any::<char>(),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn kinds(input: &str) -> Vec<ItemKind> {
    Scanner::default().tokenize(input).unwrap().kinds()
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn items_reproduce_input(input in scanner_input()) {
        let items = Scanner::default().tokenize(&input).unwrap();
        prop_assert_eq!(items.to_string(), input.clone());
    }

    #[test]
    fn items_are_contiguous(input in scanner_input()) {
        let items = Scanner::default().tokenize(&input).unwrap();
        let mut offset = 0;
        for item in &items {
            prop_assert_eq!(item.pos(), offset);
            prop_assert_eq!(item.text(), &input[item.span()]);
            offset = item.span().end;
        }
        prop_assert_eq!(offset, input.len());
    }

    #[test]
    fn scan_ends_with_exactly_one_end_marker(input in scanner_input()) {
        let kinds = kinds(&input);
        prop_assert_eq!(kinds.last(), Some(&ItemKind::EndOfInput));
        let markers = kinds.iter().filter(|k| **k == ItemKind::EndOfInput).count();
        prop_assert_eq!(markers, 1);
    }

    #[test]
    fn canonical_quads_are_addresses(octets in proptest::array::uniform4(0u8..=255)) {
        let input = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        prop_assert_eq!(kinds(&input), vec![ItemKind::NumericAddress, ItemKind::EndOfInput]);
    }

    #[test]
    fn out_of_range_octet_is_an_error(
        octets in proptest::array::uniform4(0u16..=255),
        bad in 256u16..1000,
        slot in 0usize..4,
    ) {
        let mut octets = octets;
        octets[slot] = bad;
        let input = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        prop_assert_eq!(kinds(&input), vec![ItemKind::Error, ItemKind::EndOfInput]);
    }

    #[test]
    fn partial_consumption_then_abandon_terminates(input in scanner_input(), take in 0usize..5) {
        let report = Scanner::default()
            .run(&input, |stream| stream.take(take).count())
            .unwrap();
        prop_assert!(report.output <= take);
        prop_assert_eq!(report.emitted, report.output);
    }
}
