//! Character classes.
//!
//! Every predicate is a pure, total function over a single `char`. They carry
//! no scanner state and are handed to the accept primitives through
//! [`RuneClass`], either directly (any `Fn(char) -> bool` is a class) or as an
//! explicit set via [`AnyOf`].

use crate::EOF;

/// A classifier the accept primitives consult one rune at a time.
pub trait RuneClass {
    /// Returns `true` if `r` belongs to this class.
    fn contains(&self, r: char) -> bool;
}

impl<F> RuneClass for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn contains(&self, r: char) -> bool {
        self(r)
    }
}

/// A class made of an explicit set of characters.
///
/// The end-of-input sentinel is never a member, even if the set spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnyOf<'s>(pub &'s str);

impl RuneClass for AnyOf<'_> {
    #[inline]
    fn contains(&self, r: char) -> bool {
        r != EOF && self.0.contains(r)
    }
}

/// `' '` only.
#[inline]
pub fn is_space(r: char) -> bool {
    r == ' '
}

/// Space or horizontal tab.
#[inline]
pub fn is_whitespace(r: char) -> bool {
    r == ' ' || r == '\t'
}

/// One of `"`, `'` or `` ` ``.
#[inline]
pub fn is_quote(r: char) -> bool {
    matches!(r, '"' | '\'' | '`')
}

/// `\r` or `\n`.
#[inline]
pub fn is_newline(r: char) -> bool {
    r == '\r' || r == '\n'
}

#[inline]
pub fn is_alpha_lower(r: char) -> bool {
    r.is_ascii_lowercase()
}

#[inline]
pub fn is_alpha_upper(r: char) -> bool {
    r.is_ascii_uppercase()
}

/// ASCII letter.
#[inline]
pub fn is_alpha(r: char) -> bool {
    is_alpha_lower(r) || is_alpha_upper(r)
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(r: char) -> bool {
    r.is_ascii_digit()
}

/// ASCII letter or digit.
#[inline]
pub fn is_alphanumeric(r: char) -> bool {
    is_alpha(r) || is_digit(r)
}

/// Characters allowed inside a hostname label: letters, digits and `-`.
#[inline]
pub fn is_hostname_char(r: char) -> bool {
    is_alphanumeric(r) || r == '-'
}

/// Characters that end a token: whitespace, newlines and end of input.
///
/// Recognizers use this to find where a malformed token stops.
#[inline]
pub fn is_delimiter(r: char) -> bool {
    r == EOF || is_whitespace(r) || is_newline(r)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
