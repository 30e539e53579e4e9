//! Cursor misuse errors.

use thiserror::Error;

/// A cursor operation that would corrupt the read position.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    /// `backup` was called with no forward step left to undo: twice in a row,
    /// before any `next`, or after a multi-rune jump.
    #[error("cannot step back at byte {pos}: no preceding forward step to undo")]
    BackupWithoutStep { pos: usize },
}
