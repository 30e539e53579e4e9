//! Low-level scanning primitives for `scanr`.
//!
//! This crate owns everything that touches the input text directly:
//!
//! - [`Cursor`] decodes UTF-8 one rune at a time and tracks the pending
//!   emission window (`start..pos`).
//! - [`predicate`] holds the named character classes and the [`RuneClass`]
//!   trait used to inject them into the accept primitives.
//! - The accept primitives (`accept_one_of`, `accept_run`, `accept_until`,
//!   `accept_while`, `accept_until_match`, `accept_literal`) are methods on
//!   [`Cursor`], defined in the `accept` module.
//!
//! Nothing here emits tokens or spawns threads; that is the job of the
//! `scanr` crate built on top.

mod accept;
mod cursor;
mod error;
pub mod predicate;

pub use cursor::{Cursor, EOF};
pub use error::CursorError;
pub use predicate::{AnyOf, RuneClass};

/// The ten ASCII decimal digits, for use with the set-based accept primitives.
pub const DIGITS: &str = "0123456789";
