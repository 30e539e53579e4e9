//! Hostnames and hostname labels.
//!
//! A label starts with a letter or digit, continues with letters, digits and
//! `-`, and does not end with `-`.

use scanr_core::predicate::{is_alphanumeric, is_delimiter, is_hostname_char};
use scanr_core::Cursor;

use super::{accept, reject};
use crate::item::ItemKind;
use crate::machine::Machine;
use crate::state::{Policy, State, Transition};

/// Consume one label followed by a literal `.` and emit it as
/// [`ItemKind::Hostname`].
///
/// Chain it with a suppressing [`Policy`] to assemble longer names from
/// individual labels.
pub fn scan_hostname_label(m: &mut Machine<'_>) -> Transition {
    hostname_label_with(m, &Policy::default())
}

/// [`scan_hostname_label`] with an explicit policy.
pub fn hostname_label(policy: Policy) -> State {
    State::new(move |m| hostname_label_with(m, &policy))
}

fn hostname_label_with(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    if label(m) && m.accept_one_of(".") {
        accept(m, ItemKind::Hostname, policy)
    } else {
        reject(m, policy)
    }
}

/// Consume a whole dotted hostname and emit it as [`ItemKind::Hostname`].
///
/// Labels are separated by `.`; a trailing `.` is allowed. The name must be
/// followed by whitespace, a newline or the end of input.
pub fn scan_hostname(m: &mut Machine<'_>) -> Transition {
    hostname_with(m, &Policy::default())
}

/// [`scan_hostname`] with an explicit policy.
pub fn hostname(policy: Policy) -> State {
    State::new(move |m| hostname_with(m, &policy))
}

fn hostname_with(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    loop {
        if !label(m) {
            return reject(m, policy);
        }
        if !m.accept_one_of(".") || !is_alphanumeric(m.peek()) {
            break;
        }
    }
    if !is_delimiter(m.peek()) {
        return reject(m, policy);
    }
    accept(m, ItemKind::Hostname, policy)
}

/// Consume one label. Returns `false` if it does not start with a letter or
/// digit (nothing consumed) or ends with `-`.
fn label(cursor: &mut Cursor<'_>) -> bool {
    if !is_alphanumeric(cursor.peek()) {
        return false;
    }
    cursor.accept_while(is_hostname_char);
    cursor.prev_rune() != '-'
}
