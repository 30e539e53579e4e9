//! Engine errors.
//!
//! Malformed input is not an error at this level: recognizers report it as
//! [`ItemKind::Error`](crate::ItemKind::Error) items. `ScanError` covers
//! failures of the engine itself.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A state function panicked on the producer thread.
    #[error("scanner producer thread panicked")]
    ProducerPanicked,
}
