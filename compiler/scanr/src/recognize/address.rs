//! Dotted-quad numeric addresses.
//!
//! Octets are matched greedily, one digit at a time, so that only values in
//! `0..=255` can be consumed:
//!
//! | Lead | Then | Octets |
//! |------|------|--------|
//! | `0` | nothing | `0` |
//! | `1` | up to two digits | `1`, `10`–`19`, `100`–`199` |
//! | `2` | `0`–`4`, then up to one digit | `20`–`24`, `200`–`249` |
//! | `2` | `5`, then optionally `0`–`5` | `25`, `250`–`255` |
//! | `2` | `6`–`9` | `26`–`29` |
//! | `2` | nothing | `2` |
//! | `3`–`9` | up to one digit | `3`–`99` |
//!
//! Octets are canonical: a leading `0` is only valid as the whole octet, so
//! `010` is rejected rather than read as ten (or eight).

use scanr_core::predicate::is_delimiter;
use scanr_core::{Cursor, DIGITS};

use super::{accept, reject};
use crate::item::ItemKind;
use crate::machine::Machine;
use crate::state::{Policy, State, Transition};

const OCTETS: usize = 4;

/// Consume four dot-separated octets and emit [`ItemKind::NumericAddress`].
///
/// The address must be followed by whitespace, a newline or the end of
/// input. Out-of-range octets, missing dots, extra digits, a fifth octet or
/// trailing text produce a single [`ItemKind::Error`] item covering the
/// token.
pub fn scan_numeric_address(m: &mut Machine<'_>) -> Transition {
    numeric_address_with(m, &Policy::default())
}

/// [`scan_numeric_address`] with an explicit policy.
pub fn numeric_address(policy: Policy) -> State {
    State::new(move |m| numeric_address_with(m, &policy))
}

fn numeric_address_with(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    for index in 0..OCTETS {
        if index > 0 && !m.accept_one_of(".") {
            return reject(m, policy);
        }
        if !octet(m) {
            return reject(m, policy);
        }
    }
    // An overlong fourth octet, a fifth octet or trailing text.
    if !is_delimiter(m.peek()) {
        return reject(m, policy);
    }
    accept(m, ItemKind::NumericAddress, policy)
}

/// Consume one octet in `0..=255`. Returns `false`, consuming nothing, if the
/// next rune is not a digit.
fn octet(cursor: &mut Cursor<'_>) -> bool {
    match cursor.next() {
        '0' => {}
        '1' => {
            if cursor.accept_one_of(DIGITS) {
                cursor.accept_one_of(DIGITS);
            }
        }
        '2' => match cursor.next() {
            '0'..='4' => {
                cursor.accept_one_of(DIGITS);
            }
            '5' => {
                cursor.accept_one_of("012345");
            }
            '6'..='9' => {}
            _ => cursor.backup(),
        },
        '3'..='9' => {
            cursor.accept_one_of(DIGITS);
        }
        _ => {
            cursor.backup();
            return false;
        }
    }
    true
}
