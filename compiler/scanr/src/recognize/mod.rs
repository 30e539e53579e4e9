//! Concrete recognizers and the built-in grammar.
//!
//! Every recognizer comes in two forms:
//!
//! - a state function using the default [`Policy`] (`scan_space`,
//!   `scan_numeric_address`, ...), usable wherever a [`StateFn`] is expected;
//! - a constructor taking a [`Policy`] and returning a [`State`] (`space`,
//!   `numeric_address`, ...), for grammars that need a different follow-up
//!   state or want to suppress emission.
//!
//! # Errors
//!
//! A recognizer that finds malformed input extends the pending text through
//! the rest of the token (up to the next delimiter), emits it as a single
//! [`ItemKind::Error`] item and takes the policy's `on_error` transition. It
//! never emits a success item for the same text.
//!
//! [`StateFn`]: crate::StateFn

mod address;
mod hostname;
mod layout;

pub use address::{numeric_address, scan_numeric_address};
pub use hostname::{hostname, hostname_label, scan_hostname, scan_hostname_label};
pub use layout::{newline, scan_newline, scan_space, space};

use scanr_core::predicate::{is_alphanumeric, is_delimiter, is_digit, is_newline, is_space};
use scanr_core::EOF;

use crate::item::ItemKind;
use crate::machine::Machine;
use crate::state::{Policy, Transition};

/// Home state of the built-in grammar.
///
/// Looks at the next rune and hands over to the matching recognizer:
/// spaces, newlines, numeric addresses and hostnames. A token made only of
/// digits and dots is an address; any other token starting with a letter or
/// digit is a hostname (`1e100.net`). Anything else is reported as an error
/// token.
pub fn dispatch(m: &mut Machine<'_>) -> Transition {
    let r = m.peek();
    if is_space(r) {
        Transition::to(scan_space)
    } else if is_newline(r) {
        Transition::to(scan_newline)
    } else if is_digit(r) && is_numeric_token(m.remaining()) {
        Transition::to(scan_numeric_address)
    } else if is_alphanumeric(r) {
        Transition::to(scan_hostname)
    } else if r == EOF && m.is_eof() {
        Transition::Home
    } else {
        reject(m, &Policy::default())
    }
}

/// Returns `true` if the token at the start of `rest` (up to the next
/// delimiter) holds nothing but digits and dots.
fn is_numeric_token(rest: &str) -> bool {
    rest.chars()
        .take_while(|&r| !is_delimiter(r))
        .all(|r| is_digit(r) || r == '.')
}

/// Finish a successful match according to `policy`.
fn accept(m: &mut Machine<'_>, kind: ItemKind, policy: &Policy) -> Transition {
    if policy.emit {
        m.emit(kind);
    }
    policy.on_success.clone()
}

/// Emit the malformed token as one error item.
fn reject(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    // With nothing pending, take at least one rune so the scan makes progress.
    let lone_delimiter = m.pending().is_empty() && is_delimiter(m.next());
    if !lone_delimiter {
        m.accept_until_match(is_delimiter);
    }
    tracing::trace!(pos = m.start(), text = m.pending(), "malformed token");
    m.emit(ItemKind::Error);
    policy.on_error.clone()
}
