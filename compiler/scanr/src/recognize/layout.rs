//! Spaces and line endings.

use scanr_core::predicate::is_space;

use super::accept;
use crate::item::ItemKind;
use crate::machine::Machine;
use crate::state::{Policy, State, Transition};

/// Consume a run of spaces and emit it as [`ItemKind::Space`].
///
/// An empty run still emits an (empty) item.
pub fn scan_space(m: &mut Machine<'_>) -> Transition {
    space_with(m, &Policy::default())
}

/// [`scan_space`] with an explicit policy.
pub fn space(policy: Policy) -> State {
    State::new(move |m| space_with(m, &policy))
}

fn space_with(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    m.accept_while(is_space);
    accept(m, ItemKind::Space, policy)
}

/// Consume one line ending (`\n`, `\r\n` or a lone `\r`) and emit it as
/// [`ItemKind::Newline`].
///
/// If the next rune is not a line ending nothing is consumed or emitted and
/// the state returns home.
pub fn scan_newline(m: &mut Machine<'_>) -> Transition {
    newline_with(m, &Policy::default())
}

/// [`scan_newline`] with an explicit policy.
///
/// The policy only applies to a matched line ending. On any other rune the
/// state returns [`Transition::Home`] without consuming, so `newline` must
/// not be used as a scanner's home state: on input that is not a line ending
/// it would run forever.
pub fn newline(policy: Policy) -> State {
    State::new(move |m| newline_with(m, &policy))
}

fn newline_with(m: &mut Machine<'_>, policy: &Policy) -> Transition {
    match m.next() {
        '\r' => {
            m.accept_one_of("\n");
        }
        '\n' => {}
        _ => {
            m.backup();
            return Transition::Home;
        }
    }
    accept(m, ItemKind::Newline, policy)
}
