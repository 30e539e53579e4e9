//! Accept primitives: generic consumption loops over the cursor.
//!
//! Each primitive either consumes input and reports it, or leaves the cursor
//! exactly where it was. None of them emit; they only grow the pending
//! window. Loops end with a single step-back over the rune that stopped them,
//! which is why state functions must not call `backup` right after an accept
//! primitive.

use crate::cursor::{Cursor, EOF};
use crate::predicate::{AnyOf, RuneClass};

impl Cursor<'_> {
    /// Consume one rune if it is in `valid`.
    pub fn accept_one_of(&mut self, valid: &str) -> bool {
        if AnyOf(valid).contains(self.next()) {
            return true;
        }
        self.backup();
        false
    }

    /// Consume a maximal run of runes from `valid`, returning how many were
    /// consumed.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        let class = AnyOf(valid);
        let mut count = 0;
        while class.contains(self.next()) {
            count += 1;
        }
        self.backup();
        count
    }

    /// Consume up to, but not including, the next `end` rune or end of input.
    ///
    /// Returns `false` without moving when the next rune is already `end` or
    /// EOF.
    pub fn accept_until(&mut self, end: char) -> bool {
        let first = self.peek();
        if first == end || first == EOF {
            return false;
        }
        if end.is_ascii() {
            // An interior NUL decodes as EOF, so it stops the search too.
            let rest = self.remaining().as_bytes();
            #[allow(clippy::cast_possible_truncation, reason = "checked is_ascii")]
            let len = memchr::memchr2(end as u8, 0, rest).unwrap_or(rest.len());
            self.skip(len);
            return true;
        }
        loop {
            let r = self.next();
            if r == end || r == EOF {
                break;
            }
        }
        self.backup();
        true
    }

    /// Consume runes while they belong to `class`.
    pub fn accept_while(&mut self, class: impl RuneClass) -> bool {
        let mut accepted = false;
        loop {
            let r = self.next();
            if r == EOF || !class.contains(r) {
                break;
            }
            accepted = true;
        }
        self.backup();
        accepted
    }

    /// Consume runes until one belongs to `class` (or input ends).
    pub fn accept_until_match(&mut self, class: impl RuneClass) -> bool {
        let mut accepted = false;
        loop {
            let r = self.next();
            if r == EOF || class.contains(r) {
                break;
            }
            accepted = true;
        }
        self.backup();
        accepted
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// All or nothing: on a partial match the cursor does not move.
    pub fn accept_literal(&mut self, literal: &str) -> bool {
        if literal.is_empty() || !self.remaining().starts_with(literal) {
            return false;
        }
        self.skip(literal.len());
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
