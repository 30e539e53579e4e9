//! State-machine driver.
//!
//! [`Scanner::run`] binds an input to a fresh [`Machine`], runs the state
//! chain on a scoped producer thread and hands the consumer an
//! [`ItemStream`] on the calling thread. The two sides meet on a
//! zero-capacity channel, so the producer is never more than one item ahead.
//!
//! # Termination
//!
//! The chain stops when a state returns [`Transition::Stop`], or when it
//! returns [`Transition::Home`] with the input exhausted. In the second case
//! the driver emits an [`ItemKind::EndOfInput`] item first (unless disabled
//! with [`Scanner::with_end_marker`]). The initial state always runs at least
//! once, even on empty input.
//!
//! # Abandonment
//!
//! The consumer closure cannot leak the producer: the stream is dropped when
//! the closure returns, a blocked producer sees the disconnect as a
//! cancellation, and the scope joins the thread before `run` returns.

use crossbeam::channel;
use crossbeam::thread;

use crate::error::ScanError;
use crate::item::{ItemKind, Items};
use crate::machine::Machine;
use crate::recognize::dispatch;
use crate::state::{State, Transition};
use crate::stream::ItemStream;

/// Initial state, home state and driver options.
///
/// A scanner holds no per-input state and can run any number of inputs.
#[derive(Clone, Debug)]
pub struct Scanner {
    initial: State,
    home: State,
    end_marker: bool,
}

/// Outcome of [`Scanner::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport<R> {
    /// Whatever the consumer closure returned.
    pub output: R,
    /// Items the consumer received (including drained ones).
    pub emitted: usize,
    /// `true` if the consumer stopped before the producer finished.
    pub cancelled: bool,
}

#[derive(Clone, Copy, Debug)]
struct RunSummary {
    emitted: usize,
    cancelled: bool,
}

impl Scanner {
    /// Scanner whose initial state is its home state.
    pub fn new(home: State) -> Self {
        Self {
            initial: home.clone(),
            home,
            end_marker: true,
        }
    }

    /// Start from `initial` instead of the home state.
    #[must_use]
    pub fn with_initial(mut self, initial: State) -> Self {
        self.initial = initial;
        self
    }

    /// Whether reaching end of input emits an [`ItemKind::EndOfInput`] item.
    #[must_use]
    pub fn with_end_marker(mut self, enabled: bool) -> Self {
        self.end_marker = enabled;
        self
    }

    /// Scan `input`, feeding items to `consume` as they are produced.
    ///
    /// `consume` runs on the calling thread while the state chain runs on a
    /// scoped producer thread. When `consume` returns, any items it did not
    /// take are abandoned and the producer is cancelled; call
    /// [`ItemStream::drain`] to let it run to completion instead.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn run<'a, R, F>(&self, input: &'a str, consume: F) -> Result<ScanReport<R>, ScanError>
    where
        F: FnOnce(&mut ItemStream<'a>) -> R,
    {
        let (items_tx, items_rx) = channel::bounded(0);
        let span = tracing::Span::current();

        let scoped = thread::scope(|scope| {
            let producer = scope.spawn(move |_| {
                let _entered = span.enter();
                self.drive(Machine::new(input, items_tx, self.home.clone()))
            });

            let mut stream = ItemStream::new(items_rx);
            let output = consume(&mut stream);
            drop(stream);

            producer.join().map(|summary| (output, summary))
        });

        let Ok(Ok((output, summary))) = scoped else {
            tracing::error!("producer thread panicked");
            return Err(ScanError::ProducerPanicked);
        };
        tracing::debug!(
            emitted = summary.emitted,
            cancelled = summary.cancelled,
            "scan finished"
        );
        Ok(ScanReport {
            output,
            emitted: summary.emitted,
            cancelled: summary.cancelled,
        })
    }

    /// Scan `input` to completion and collect every item.
    pub fn tokenize<'a>(&self, input: &'a str) -> Result<Items<'a>, ScanError> {
        let report = self.run(input, |stream| stream.by_ref().collect::<Items<'a>>())?;
        Ok(report.output)
    }

    fn drive(&self, mut machine: Machine<'_>) -> RunSummary {
        let mut state = self.initial.clone();
        loop {
            let transition = state.run(&mut machine);
            if machine.is_cancelled() {
                break;
            }
            state = match transition {
                Transition::Next(next) => next,
                Transition::Home if machine.is_eof() => {
                    if self.end_marker {
                        machine.emit(ItemKind::EndOfInput);
                    }
                    break;
                }
                Transition::Home => machine.home().clone(),
                Transition::Stop => break,
            };
        }
        tracing::debug!(pos = machine.pos(), "producer stopped");
        RunSummary {
            emitted: machine.emitted(),
            cancelled: machine.is_cancelled(),
        }
    }
}

impl Default for Scanner {
    /// A scanner for the built-in grammar: spaces, newlines, numeric
    /// addresses and hostnames, with [`dispatch`] as home.
    fn default() -> Self {
        Self::new(State::from_fn(dispatch))
    }
}
