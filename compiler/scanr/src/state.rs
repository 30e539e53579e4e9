//! States, transitions and recognizer policies.
//!
//! A state is a unit of recognition logic: it runs against the [`Machine`],
//! consumes input, optionally emits, and returns the [`Transition`] the driver
//! should take next. States are plain values, so the same recognizer can be
//! wired into different grammars with different follow-up states.

use std::fmt;
use std::sync::Arc;

use crate::machine::Machine;

/// A state written as a plain function.
pub type StateFn = for<'m, 'a> fn(&'m mut Machine<'a>) -> Transition;

type StateClosure = dyn for<'m, 'a> Fn(&'m mut Machine<'a>) -> Transition + Send + Sync;

/// A runnable state.
///
/// Cloning is cheap: function states are copied, configured states share
/// their closure.
#[derive(Clone)]
pub struct State(Repr);

#[derive(Clone)]
enum Repr {
    Fn(StateFn),
    Closure(Arc<StateClosure>),
}

impl State {
    /// Wrap a state function.
    pub const fn from_fn(f: StateFn) -> Self {
        Self(Repr::Fn(f))
    }

    /// Wrap a closure, typically one that captures a [`Policy`].
    pub fn new<F>(f: F) -> Self
    where
        F: for<'m, 'a> Fn(&'m mut Machine<'a>) -> Transition + Send + Sync + 'static,
    {
        Self(Repr::Closure(Arc::new(f)))
    }

    /// Run this state once.
    #[inline]
    pub fn run(&self, machine: &mut Machine<'_>) -> Transition {
        match &self.0 {
            Repr::Fn(f) => f(machine),
            Repr::Closure(f) => f(machine),
        }
    }
}

impl From<StateFn> for State {
    fn from(f: StateFn) -> Self {
        Self::from_fn(f)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Fn(_) => f.write_str("State::Fn"),
            Repr::Closure(_) => f.write_str("State::Closure"),
        }
    }
}

/// What the driver does after a state returns.
#[derive(Clone, Debug)]
pub enum Transition {
    /// Run the given state next.
    Next(State),
    /// Return to the scanner's home state. At end of input this terminates
    /// the run.
    Home,
    /// Terminate the run.
    Stop,
}

impl Transition {
    /// Shorthand for `Transition::Next(State::from_fn(f))`.
    pub fn to(f: StateFn) -> Self {
        Self::Next(State::from_fn(f))
    }
}

/// How a recognizer reports its result and where it goes afterwards.
#[derive(Clone, Debug)]
pub struct Policy {
    /// Emit the recognized token. When `false` the text stays pending and
    /// becomes part of the next emitted item. Errors are always emitted.
    pub emit: bool,
    /// Transition taken after a successful match.
    pub on_success: Transition,
    /// Transition taken after an error item has been emitted.
    pub on_error: Transition,
}

impl Policy {
    /// Emit, then continue with `next` on success. Errors return home.
    pub fn then(next: Transition) -> Self {
        Self {
            on_success: next,
            ..Self::default()
        }
    }

    /// Consume without emitting, then continue with `next`.
    pub fn suppress(next: Transition) -> Self {
        Self {
            emit: false,
            on_success: next,
            ..Self::default()
        }
    }

    /// Replace the error transition.
    #[must_use]
    pub fn on_error(mut self, next: Transition) -> Self {
        self.on_error = next;
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            emit: true,
            on_success: Transition::Home,
            on_error: Transition::Home,
        }
    }
}
