//! State-function scanner.
//!
//! Converts an input string into a stream of typed [`Item`]s for a parser to
//! consume. Scanning logic is written as a chain of states: each state
//! consumes runes through the cursor primitives from `scanr_core`, emits
//! zero or more items, and names the next state to run.
//!
//! # Architecture
//!
//! - **machine.rs** - Cursor plus token emitter; what every state runs against
//! - **scanner.rs** - Driver: producer thread, termination, consumer hand-off
//! - **stream.rs** - Consumer side: `next_item`, `drain`
//! - **state.rs** - `State`, `Transition`, recognizer `Policy`
//! - **recognize/** - Space, newline, numeric address and hostname recognizers
//! - **item.rs** - `Item`, `ItemKind`, `Items`
//!
//! # Example
//!
//! ```
//! use scanr::{ItemKind, Scanner};
//!
//! let items = Scanner::default().tokenize("example.com 10.0.0.1\n")?;
//! assert_eq!(
//!     items.kinds(),
//!     [
//!         ItemKind::Hostname,
//!         ItemKind::Space,
//!         ItemKind::NumericAddress,
//!         ItemKind::Newline,
//!         ItemKind::EndOfInput,
//!     ]
//! );
//! assert_eq!(items.to_string(), "example.com 10.0.0.1\n");
//! # Ok::<(), scanr::ScanError>(())
//! ```

mod error;
mod item;
mod machine;
pub mod recognize;
mod scanner;
mod state;
mod stream;

pub use error::ScanError;
pub use item::{Item, ItemKind, Items};
pub use machine::Machine;
pub use scanner::{ScanReport, Scanner};
pub use state::{Policy, State, StateFn, Transition};
pub use stream::ItemStream;

pub use scanr_core::{predicate, AnyOf, Cursor, CursorError, RuneClass, DIGITS, EOF};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=scanr=debug` or `RUST_LOG=scanr=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Scan `input` with the built-in grammar and collect every item.
pub fn tokenize(input: &str) -> Result<Items<'_>, ScanError> {
    Scanner::default().tokenize(input)
}
