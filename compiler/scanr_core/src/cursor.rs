//! Rune cursor over a borrowed UTF-8 buffer.
//!
//! The cursor decodes one `char` at a time and remembers the byte width of the
//! last decoded rune so that exactly one step can be undone. End of input is
//! reported as the [`EOF`] sentinel with a width of zero, so stepping back
//! after reading EOF is always a no-op.
//!
//! # Pending Window
//!
//! Besides the read position the cursor tracks `start`, the first byte that
//! has not yet been handed out as part of an item. The text between `start`
//! and `pos` is the pending window; the emitter turns it into an item and then
//! calls [`Cursor::mark_emitted`].
//!
//! # Step-back Contract
//!
//! Only the most recent forward step can be undone. A second consecutive
//! [`Cursor::backup`] (or a step-back after a multi-rune jump such as
//! [`Cursor::accept_literal`]) has nothing to undo: [`Cursor::try_backup`]
//! reports it as [`CursorError::BackupWithoutStep`] and [`Cursor::backup`]
//! leaves the position where it is.

use crate::CursorError;

/// Sentinel returned by [`Cursor::next`] at end of input.
///
/// Interior NUL characters decode to the same value; use
/// [`Cursor::is_eof`] to tell them apart.
pub const EOF: char = '\0';

/// Forward-decoding cursor with single-step undo and a pending window.
///
/// # Invariant
///
/// `start <= pos <= input.len()`, and both offsets sit on `char` boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    /// Byte offset of the next rune to decode.
    pos: usize,
    /// Byte width of the most recently decoded rune (0 at EOF).
    width: usize,
    /// Start of the pending emission window.
    start: usize,
    /// Whether `width` can still be undone by a step-back.
    stepped: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            width: 0,
            start: 0,
            stepped: false,
        }
    }

    /// Decode and consume the next rune.
    ///
    /// Returns [`EOF`] without moving once the input is exhausted.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "EOF is a sentinel value, not the end of an iterator"
    )]
    pub fn next(&mut self) -> char {
        self.stepped = true;
        match self.input[self.pos..].chars().next() {
            Some(r) => {
                self.width = r.len_utf8();
                self.pos += self.width;
                r
            }
            None => {
                self.width = 0;
                EOF
            }
        }
    }

    /// Undo the most recent [`next`](Self::next).
    ///
    /// Has no effect when there is no forward step to undo.
    #[inline]
    pub fn backup(&mut self) {
        if self.stepped {
            self.pos -= self.width;
            self.stepped = false;
        }
    }

    /// Undo the most recent [`next`](Self::next), reporting misuse.
    pub fn try_backup(&mut self) -> Result<(), CursorError> {
        if !self.stepped {
            return Err(CursorError::BackupWithoutStep { pos: self.pos });
        }
        self.backup();
        Ok(())
    }

    /// Return the next rune without consuming it.
    #[inline]
    pub fn peek(&mut self) -> char {
        let r = self.next();
        self.backup();
        r
    }

    /// The rune immediately before the read position, or [`EOF`] at the
    /// start of the input.
    pub fn prev_rune(&self) -> char {
        self.input[..self.pos].chars().next_back().unwrap_or(EOF)
    }

    /// Jump forward by `len` bytes. The jump cannot be undone by `backup`.
    pub(crate) fn skip(&mut self, len: usize) {
        debug_assert!(self.input.is_char_boundary(self.pos + len));
        self.pos += len;
        self.width = 0;
        self.stepped = false;
    }

    /// Collapse the pending window after its text has been emitted.
    #[inline]
    pub fn mark_emitted(&mut self) {
        self.start = self.pos;
    }

    /// Drop the pending text without emitting it.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Text consumed since the last emission.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the pending window begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte width of the most recently decoded rune.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The whole input.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Extract `input[start..end]`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the input on `char` boundaries.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}
